use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn validate_hex_color(value: &str) -> Result<(), ValidationError> {
    let digits = value.strip_prefix('#').unwrap_or_default();
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::new("hex_color"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub name: String,
    pub industry: String,
    #[validate(url)]
    pub website: String,
    pub size: String,
    pub founded: u16,
    pub description: String,
    pub headquarters: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Branding {
    #[validate(custom(function = "validate_hex_color"))]
    pub primary_color: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
    #[validate(email)]
    pub notification_email: String,
    pub new_applications: bool,
    pub status_updates: bool,
    pub weekly_report: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySettings {
    pub info: CompanyInfo,
    pub branding: Branding,
    pub email: EmailSettings,
}
