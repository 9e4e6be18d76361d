//! The session's single source of truth.
//!
//! State is only reachable through [`Store::dispatch`] for writes and the
//! selector accessors for reads; the derived job page is recomputed on every
//! read, so there is nothing to invalidate.

pub mod action;

use serde::Serialize;

pub use action::Action;

use crate::pkg::internal::{
    adaptors::{
        jobs::{
            mutators::JobMutator,
            selectors::JobSelector,
            spec::{JobPosting, JobsState},
        },
        notifications::{
            mutators::NotificationMutator, selectors::NotificationSelector,
            spec::{Notification, NotificationsState},
        },
        profile::{mutators::ProfileMutator, selectors::ProfileSelector, spec::UserState},
        security::{mutators::SecurityMutator, spec::SecuritySettings},
        settings::{mutators::SettingsMutator, spec::CompanySettings},
    },
    seed,
};

#[derive(Debug, Clone)]
pub struct Store {
    jobs: JobsState,
    notifications: NotificationsState,
    user: UserState,
    company: CompanySettings,
    security: SecuritySettings,
}

/// Read-only view of everything, for rendering.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub jobs: &'a JobsState,
    pub notifications: &'a NotificationsState,
    pub user: &'a UserState,
    pub company: &'a CompanySettings,
    pub security: &'a SecuritySettings,
}

impl Store {
    pub fn new(
        jobs: Vec<JobPosting>,
        notifications: Vec<Notification>,
        user: UserState,
        company: CompanySettings,
        security: SecuritySettings,
        items_per_page: usize,
    ) -> Self {
        Store {
            jobs: JobsState::new(jobs, items_per_page),
            notifications: NotificationsState::new(notifications),
            user,
            company,
            security,
        }
    }

    pub fn seeded(items_per_page: usize) -> Self {
        Store::new(
            seed::jobs(),
            seed::notifications(),
            UserState::signed_in(seed::profile()),
            seed::company(),
            seed::security(),
            items_per_page,
        )
    }

    pub fn dispatch(&mut self, action: Action) {
        let name = action.name();
        let applied = match action {
            Action::SetJobs(jobs) => {
                JobMutator::new(&mut self.jobs).set_all(jobs);
                true
            }
            Action::CreateJob(job) => JobMutator::new(&mut self.jobs).create(job).is_some(),
            Action::UpdateJob(job) => JobMutator::new(&mut self.jobs).update(job).is_some(),
            Action::DeleteJob(id) => JobMutator::new(&mut self.jobs).delete(&id),
            Action::SetFilters(patch) => {
                JobMutator::new(&mut self.jobs).set_filters(patch);
                true
            }
            Action::SetCurrentPage(page) => {
                JobMutator::new(&mut self.jobs).set_current_page(page);
                true
            }
            Action::SetItemsPerPage(n) => {
                JobMutator::new(&mut self.jobs).set_items_per_page(n);
                true
            }
            Action::AddNotification(payload) => {
                NotificationMutator::new(&mut self.notifications).add(payload);
                true
            }
            Action::MarkAsRead(id) => NotificationMutator::new(&mut self.notifications).mark_as_read(&id),
            Action::MarkAllAsRead => {
                NotificationMutator::new(&mut self.notifications).mark_all_as_read();
                true
            }
            Action::DeleteNotification(id) => NotificationMutator::new(&mut self.notifications).delete(&id),
            Action::UpdateProfile(patch) => ProfileMutator::new(&mut self.user).update(patch),
            Action::SetLoading(loading) => {
                ProfileMutator::new(&mut self.user).set_loading(loading);
                true
            }
            Action::SetError(error) => {
                ProfileMutator::new(&mut self.user).set_error(error);
                true
            }
            Action::Logout => {
                ProfileMutator::new(&mut self.user).logout();
                true
            }
            Action::SaveCompanyInfo(info) => {
                SettingsMutator::new(&mut self.company).save_info(info);
                true
            }
            Action::SaveBranding(branding) => {
                SettingsMutator::new(&mut self.company).save_branding(branding);
                true
            }
            Action::SaveEmailSettings(email) => {
                SettingsMutator::new(&mut self.company).save_email(email);
                true
            }
            Action::SetTwoFactor(enabled) => SecurityMutator::new(&mut self.security).set_two_factor(enabled),
            Action::SetAlerts(alerts) => {
                SecurityMutator::new(&mut self.security).set_alerts(alerts);
                true
            }
            Action::RecordSecurityEvent(event) => {
                SecurityMutator::new(&mut self.security).record(event);
                true
            }
        };
        if applied {
            tracing::debug!("dispatched {}", name);
        } else {
            tracing::debug!("{} left state unchanged", name);
        }
    }

    pub fn jobs(&self) -> JobSelector<'_> {
        JobSelector::new(&self.jobs)
    }

    pub fn notifications(&self) -> NotificationSelector<'_> {
        NotificationSelector::new(&self.notifications)
    }

    pub fn user(&self) -> ProfileSelector<'_> {
        ProfileSelector::new(&self.user)
    }

    pub fn company(&self) -> &CompanySettings {
        &self.company
    }

    pub fn security(&self) -> &SecuritySettings {
        &self.security
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            jobs: &self.jobs,
            notifications: &self.notifications,
            user: &self.user,
            company: &self.company,
            security: &self.security,
        }
    }
}
