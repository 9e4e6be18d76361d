use chrono::Utc;
use uuid::Uuid;

use crate::pkg::internal::adaptors::notifications::spec::{
    Notification, NotificationPayload, NotificationsState,
};

pub struct NotificationMutator<'a> {
    state: &'a mut NotificationsState,
}

impl<'a> NotificationMutator<'a> {
    pub fn new(state: &'a mut NotificationsState) -> Self {
        NotificationMutator { state }
    }

    /// Prepends so the sequence stays most-recent-first.
    pub fn add(&mut self, payload: NotificationPayload) -> &Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            category: payload.category,
            title: payload.title,
            message: payload.message,
            read: false,
            created_at: Utc::now(),
        };
        tracing::debug!("notification {} added", &notification.id);
        self.state.notifications.insert(0, notification);
        self.state.unread_count += 1;
        &self.state.notifications[0]
    }

    /// Returns true only on an unread -> read transition.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.state.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                self.state.unread_count = self.state.unread_count.saturating_sub(1);
                true
            }
            _ => false,
        }
    }

    pub fn mark_all_as_read(&mut self) {
        for n in self.state.notifications.iter_mut() {
            n.read = true;
        }
        self.state.unread_count = 0;
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let Some(idx) = self.state.notifications.iter().position(|n| n.id == id) else {
            return false;
        };
        let removed = self.state.notifications.remove(idx);
        if !removed.read {
            self.state.unread_count = self.state.unread_count.saturating_sub(1);
        }
        true
    }
}
