use serde::Deserialize;

use crate::pkg::internal::adaptors::{
    jobs::spec::{FilterPatch, JobPosting},
    notifications::spec::NotificationPayload,
    profile::spec::ProfilePatch,
    security::spec::{AlertPreferences, SecurityEvent},
    settings::spec::{Branding, CompanyInfo, EmailSettings},
};

/// Every state transition the store accepts.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Action {
    SetJobs(Vec<JobPosting>),
    CreateJob(JobPosting),
    UpdateJob(JobPosting),
    DeleteJob(String),
    SetFilters(FilterPatch),
    SetCurrentPage(usize),
    SetItemsPerPage(usize),

    AddNotification(NotificationPayload),
    MarkAsRead(String),
    MarkAllAsRead,
    DeleteNotification(String),

    UpdateProfile(ProfilePatch),
    SetLoading(bool),
    SetError(Option<String>),
    Logout,

    SaveCompanyInfo(CompanyInfo),
    SaveBranding(Branding),
    SaveEmailSettings(EmailSettings),

    SetTwoFactor(bool),
    SetAlerts(AlertPreferences),
    RecordSecurityEvent(SecurityEvent),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetJobs(_) => "setJobs",
            Action::CreateJob(_) => "createJob",
            Action::UpdateJob(_) => "updateJob",
            Action::DeleteJob(_) => "deleteJob",
            Action::SetFilters(_) => "setFilters",
            Action::SetCurrentPage(_) => "setCurrentPage",
            Action::SetItemsPerPage(_) => "setItemsPerPage",
            Action::AddNotification(_) => "addNotification",
            Action::MarkAsRead(_) => "markAsRead",
            Action::MarkAllAsRead => "markAllAsRead",
            Action::DeleteNotification(_) => "deleteNotification",
            Action::UpdateProfile(_) => "updateProfile",
            Action::SetLoading(_) => "setLoading",
            Action::SetError(_) => "setError",
            Action::Logout => "logout",
            Action::SaveCompanyInfo(_) => "saveCompanyInfo",
            Action::SaveBranding(_) => "saveBranding",
            Action::SaveEmailSettings(_) => "saveEmailSettings",
            Action::SetTwoFactor(_) => "setTwoFactor",
            Action::SetAlerts(_) => "setAlerts",
            Action::RecordSecurityEvent(_) => "recordSecurityEvent",
        }
    }
}
