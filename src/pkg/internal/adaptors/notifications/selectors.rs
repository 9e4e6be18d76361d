use chrono::{DateTime, Utc};

use crate::pkg::internal::adaptors::notifications::spec::{Notification, NotificationsState};

/// Header label for how long ago something happened.
pub fn relative_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - created_at).num_minutes();
    if minutes < 1 {
        return "Just now".into();
    }
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

pub struct NotificationSelector<'a> {
    state: &'a NotificationsState,
}

impl<'a> NotificationSelector<'a> {
    pub fn new(state: &'a NotificationsState) -> Self {
        NotificationSelector { state }
    }

    pub fn get_all(&self) -> &'a [Notification] {
        &self.state.notifications
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a Notification> {
        self.state.notifications.iter().find(|n| n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.state.unread_count
    }

    pub fn preview(&self, limit: usize) -> &'a [Notification] {
        let all = self.get_all();
        &all[..limit.min(all.len())]
    }
}
