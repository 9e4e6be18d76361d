use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pkg::internal::patch::deserialize_some;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub join_date: NaiveDate,
}

/// Field-level patch. Optional profile fields take `Some(None)` to clear.
/// The profile `id` is not patchable; an `id` key in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub first_name: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub last_name: Option<String>,
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub avatar: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub bio: Option<Option<String>>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

impl UserProfile {
    pub fn merge(&mut self, patch: ProfilePatch) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut self.first_name, patch.first_name);
        set(&mut self.last_name, patch.last_name);
        set(&mut self.email, patch.email);
        set(&mut self.role, patch.role);
        set(&mut self.department, patch.department);
        set(&mut self.avatar, patch.avatar);
        set(&mut self.phone, patch.phone);
        set(&mut self.location, patch.location);
        set(&mut self.bio, patch.bio);
        set(&mut self.join_date, patch.join_date);
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub profile: Option<UserProfile>,
    pub is_authenticated: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserState {
    pub fn signed_in(profile: UserProfile) -> Self {
        UserState {
            profile: Some(profile),
            is_authenticated: true,
            loading: false,
            error: None,
        }
    }
}
