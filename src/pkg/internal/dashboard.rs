use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::pkg::{
    internal::adaptors::{
        jobs::selectors::JobStats,
        notifications::{selectors::relative_age, spec::NotificationCategory},
    },
    store::Store,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreview<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub category: NotificationCategory,
    pub title: &'a str,
    pub message: &'a str,
    pub read: bool,
    pub age: String,
}

/// What the header bar shows: who is signed in and the latest notifications.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header<'a> {
    pub display_name: String,
    pub initials: String,
    pub unread_count: usize,
    pub notifications: Vec<NotificationPreview<'a>>,
}

impl<'a> Header<'a> {
    pub fn build(store: &'a Store, preview_limit: usize, now: DateTime<Utc>) -> Self {
        let user = store.user();
        let notifications = store.notifications();
        Header {
            display_name: user.display_name(),
            initials: user.initials(),
            unread_count: notifications.unread_count(),
            notifications: notifications
                .preview(preview_limit)
                .iter()
                .map(|n| NotificationPreview {
                    id: &n.id,
                    category: n.category,
                    title: &n.title,
                    message: &n.message,
                    read: n.read,
                    age: relative_age(n.created_at, now),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<'a> {
    pub greeting: String,
    #[serde(flatten)]
    pub stats: JobStats<'a>,
    pub unread_count: usize,
}

impl<'a> Dashboard<'a> {
    pub fn build(store: &'a Store, recent_limit: usize) -> Self {
        let greeting = match store.user().first_name() {
            Some(name) => format!("Welcome back, {}!", name),
            None => "Welcome back!".into(),
        };
        Dashboard {
            greeting,
            stats: store.jobs().stats(recent_limit),
            unread_count: store.notifications().unread_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::store::Action;

    #[test]
    #[traced_test]
    fn test_dashboard_over_seed() {
        let store = Store::seeded(10);
        let dashboard = Dashboard::build(&store, 5);
        assert_eq!(dashboard.greeting, "Welcome back, Alex!");
        assert_eq!(dashboard.stats.active_jobs, 11);
        assert_eq!(dashboard.stats.total_applicants, 141);
        assert_eq!(dashboard.stats.recent.len(), 5);
        assert_eq!(dashboard.unread_count, 2);
    }

    #[test]
    #[traced_test]
    fn test_dashboard_tracks_deletes() {
        let mut store = Store::seeded(10);
        store.dispatch(Action::DeleteJob("1".into()));
        let dashboard = Dashboard::build(&store, 5);
        assert_eq!(dashboard.stats.active_jobs, 10);
        assert_eq!(dashboard.stats.total_applicants, 117);
        assert_eq!(dashboard.stats.recent[0].title, "Product Manager");
    }

    #[test]
    #[traced_test]
    fn test_header_preview() {
        let mut store = Store::seeded(10);
        let now = Utc.with_ymd_and_hms(2025, 5, 11, 10, 0, 0).unwrap();
        let header = Header::build(&store, 5, now);
        assert_eq!(header.initials, "AM");
        assert_eq!(header.notifications.len(), 4);
        assert_eq!(header.notifications[0].age, "45m ago");
        assert_eq!(header.notifications[1].age, "1h ago");
        assert_eq!(header.notifications[3].age, "1d ago");

        store.dispatch(Action::Logout);
        let header = Header::build(&store, 5, now);
        assert_eq!(header.display_name, "User");
    }
}
