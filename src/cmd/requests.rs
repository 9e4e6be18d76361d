use serde::Deserialize;
use standard_error::{Interpolate, StandardError};
use validator::{Validate, ValidationErrors};

use crate::{
    pkg::{
        internal::adaptors::{
            jobs::spec::JobInput,
            profile::spec::ProfilePatch,
            security::spec::{PasswordChange, SecurityEvent, SecurityEventKind},
            settings::spec::{Branding, CompanyInfo, EmailSettings},
        },
        store::{Action, Store},
    },
    prelude::Result,
};

/// One step of a scripted session: either a raw action or a form submission
/// that is validated before it becomes an action.
#[derive(Debug, Deserialize)]
#[serde(tag = "request", rename_all = "camelCase")]
pub enum Request {
    Dispatch { action: Action },
    SubmitJob { form: JobInput },
    EditJob { id: String, form: JobInput },
    DeleteJob { id: String },
    ChangePassword { form: PasswordChange },
    SaveCompanyInfo { form: CompanyInfo },
    SaveBranding { form: Branding },
    SaveEmailSettings { form: EmailSettings },
    SaveProfile { form: ProfilePatch },
}

fn invalid(e: ValidationErrors) -> StandardError {
    StandardError::new("ERR-FORM-001").interpolate_err(e.to_string())
}

pub fn apply(store: &mut Store, request: Request) -> Result<()> {
    match request {
        Request::Dispatch { action } => store.dispatch(action),
        Request::SubmitJob { form } => {
            let job = form.into_new_posting().map_err(invalid)?;
            tracing::info!("\"{}\" has been created successfully.", &job.title);
            store.dispatch(Action::CreateJob(job));
        }
        Request::EditJob { id, form } => {
            let existing = store
                .jobs()
                .get_by_id(&id)
                .ok_or_else(|| StandardError::new("ERR-JOB-001").interpolate_err(id.clone()))?;
            let job = form.apply_to(existing).map_err(invalid)?;
            tracing::info!("\"{}\" has been updated successfully.", &job.title);
            store.dispatch(Action::UpdateJob(job));
        }
        Request::DeleteJob { id } => {
            if let Some(job) = store.jobs().get_by_id(&id) {
                tracing::info!("\"{}\" has been deleted successfully.", &job.title);
            }
            store.dispatch(Action::DeleteJob(id));
        }
        Request::ChangePassword { form } => {
            form.validate().map_err(invalid)?;
            store.dispatch(Action::RecordSecurityEvent(SecurityEvent::local(
                SecurityEventKind::PasswordChanged,
            )));
        }
        Request::SaveCompanyInfo { form } => {
            form.validate().map_err(invalid)?;
            store.dispatch(Action::SaveCompanyInfo(form));
        }
        Request::SaveBranding { form } => {
            form.validate().map_err(invalid)?;
            store.dispatch(Action::SaveBranding(form));
        }
        Request::SaveEmailSettings { form } => {
            form.validate().map_err(invalid)?;
            store.dispatch(Action::SaveEmailSettings(form));
        }
        Request::SaveProfile { form } => {
            if store.user().profile().is_none() {
                return Err(StandardError::new("ERR-USER-001"));
            }
            form.validate().map_err(invalid)?;
            store.dispatch(Action::UpdateProfile(form));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::adaptors::jobs::spec::JobStatus;

    fn script(json: &str) -> Vec<Request> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    #[traced_test]
    fn test_form_session() -> Result<()> {
        let mut store = Store::seeded(10);
        let requests = script(
            r##"[
                {"request": "submitJob", "form": {
                    "title": "Site Reliability Engineer", "department": "Engineering",
                    "location": "Remote", "type": "Contract"
                }},
                {"request": "editJob", "id": "9", "form": {
                    "title": "HR Specialist", "department": "Human Resources",
                    "location": "Remote", "type": "Part-time", "status": "active"
                }},
                {"request": "deleteJob", "id": "4"},
                {"request": "changePassword", "form": {
                    "currentPassword": "old", "newPassword": "n3w", "confirmPassword": "n3w"
                }},
                {"request": "saveBranding", "form": {"primaryColor": "#112233"}},
                {"request": "saveProfile", "form": {"firstName": "Alexandra"}},
                {"request": "dispatch", "action": {"type": "markAsRead", "payload": "1"}}
            ]"##,
        );
        for request in requests {
            apply(&mut store, request)?;
        }
        let jobs = store.jobs();
        assert_eq!(jobs.get_all().len(), 12);
        assert!(jobs.get_by_id("4").is_none());
        assert_eq!(jobs.get_by_id("9").map(|j| j.status), Some(JobStatus::Active));
        assert_eq!(jobs.get_by_id("9").map(|j| j.posted_date.to_string()), Some("2025-05-05".into()));
        assert_eq!(jobs.get_all().last().map(|j| j.title.as_str()), Some("Site Reliability Engineer"));
        assert_eq!(store.security().activity[0].kind, SecurityEventKind::PasswordChanged);
        assert_eq!(store.company().branding.primary_color, "#112233");
        assert_eq!(store.user().display_name(), "Alexandra Morgan");
        assert_eq!(store.notifications().unread_count(), 1);
        Ok(())
    }

    #[test]
    #[traced_test]
    fn test_rejected_forms_leave_state_alone() {
        let mut store = Store::seeded(10);
        let requests = script(
            r##"[
                {"request": "submitJob", "form": {"title": "  ", "department": "Sales", "location": "Remote"}},
                {"request": "editJob", "id": "missing", "form": {"title": "A", "department": "B", "location": "C"}},
                {"request": "changePassword", "form": {
                    "currentPassword": "old", "newPassword": "one", "confirmPassword": "two"
                }},
                {"request": "saveBranding", "form": {"primaryColor": "blue"}}
            ]"##,
        );
        for request in requests {
            assert!(apply(&mut store, request).is_err());
        }
        assert_eq!(store.jobs().get_all().len(), 12);
        assert_eq!(store.security().activity.len(), 5);
        assert_eq!(store.company().branding.primary_color, "#0f52ba");

        store.dispatch(Action::Logout);
        let save = script(r#"[{"request": "saveProfile", "form": {"firstName": "Sam"}}]"#);
        for request in save {
            assert!(apply(&mut store, request).is_err());
        }
    }
}
