use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// What a caller supplies; identifier, timestamp and read flag are assigned
/// on insert.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NotificationPayload {
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsState {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl NotificationsState {
    pub fn new(notifications: Vec<Notification>) -> Self {
        let unread_count = notifications.iter().filter(|n| !n.read).count();
        NotificationsState {
            notifications,
            unread_count,
        }
    }
}
