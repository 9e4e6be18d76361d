use std::fmt::{self, Display};
use std::net::{IpAddr, Ipv4Addr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecurityEventKind {
    PasswordChanged,
    LoginSucceeded,
    LoginFailed,
    TwoFactorChanged,
}

impl Display for SecurityEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SecurityEventKind::PasswordChanged => "Password changed",
            SecurityEventKind::LoginSucceeded => "Login successful",
            SecurityEventKind::LoginFailed => "Login attempt failed",
            SecurityEventKind::TwoFactorChanged => "Two-factor settings changed",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEvent {
    #[serde(rename = "event")]
    pub kind: SecurityEventKind,
    pub occurred_at: DateTime<Utc>,
    pub ip: IpAddr,
    pub location: String,
}

impl SecurityEvent {
    /// An event raised from this session's own machine.
    pub fn local(kind: SecurityEventKind) -> Self {
        SecurityEvent {
            kind,
            occurred_at: Utc::now(),
            ip: IpAddr::V4(Ipv4Addr::LOCALHOST),
            location: "Local session".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPreferences {
    pub email_alerts: bool,
    pub login_alerts: bool,
    pub unusual_activity: bool,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        AlertPreferences {
            email_alerts: true,
            login_alerts: true,
            unusual_activity: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub alerts: AlertPreferences,
    /// Most recent first.
    pub activity: Vec<SecurityEvent>,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub current_password: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub new_password: String,
    #[validate(must_match(other = "new_password", message = "New password and confirm password must match."))]
    pub confirm_password: String,
}

impl fmt::Debug for PasswordChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordChange").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn change(current: &str, new: &str, confirm: &str) -> PasswordChange {
        PasswordChange {
            current_password: current.into(),
            new_password: new.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    #[traced_test]
    fn test_confirmation_must_match() {
        assert!(change("old", "n3w-secret", "n3w-secret").validate().is_ok());
        let errors = change("old", "n3w-secret", "n3w-secreT").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("confirm_password"));
    }

    #[test]
    #[traced_test]
    fn test_all_fields_required() {
        assert!(change("", "a", "a").validate().is_err());
        assert!(change("old", "", "").validate().is_err());
    }

    #[test]
    #[traced_test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", change("hunter2", "n3w", "n3w"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    #[traced_test]
    fn test_event_labels() {
        assert_eq!(SecurityEventKind::LoginFailed.to_string(), "Login attempt failed");
        let value = serde_json::to_value(SecurityEvent::local(SecurityEventKind::PasswordChanged)).unwrap();
        assert_eq!(value["event"], "passwordChanged");
        assert_eq!(value["ip"], "127.0.0.1");
    }
}
