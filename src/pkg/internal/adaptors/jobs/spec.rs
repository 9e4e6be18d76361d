use std::collections::HashSet;
use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pkg::internal::patch::{deserialize_some, deserialize_trimmed};

const JOB_ID_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmploymentType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

impl Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::PartTime => "Part-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for EmploymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full-time" => Ok(EmploymentType::FullTime),
            "part-time" => Ok(EmploymentType::PartTime),
            "contract" => Ok(EmploymentType::Contract),
            "internship" => Ok(EmploymentType::Internship),
            _ => Err(format!("unknown employment type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Draft,
    Closed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 3] = [JobStatus::Active, JobStatus::Draft, JobStatus::Closed];
}

impl Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            JobStatus::Active => "active",
            JobStatus::Draft => "draft",
            JobStatus::Closed => "closed",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Ok(JobStatus::Active),
            "draft" => Ok(JobStatus::Draft),
            "closed" => Ok(JobStatus::Closed),
            _ => Err(format!("unknown status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type", default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub status: JobStatus,
    pub posted_date: NaiveDate,
    #[serde(rename = "applicants", default)]
    pub applicant_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
}

/// Identifiers are 9 lowercase base-36 characters, generated on the client.
pub fn generate_job_id() -> String {
    let mut rng = rand::rng();
    (0..JOB_ID_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Makes a whole collection safe to hold: blank identifiers get a generated
/// one and a repeated identifier keeps only its first posting.
pub fn with_unique_ids(jobs: Vec<JobPosting>) -> Vec<JobPosting> {
    let mut taken: HashSet<String> = jobs
        .iter()
        .filter(|j| !j.id.is_empty())
        .map(|j| j.id.clone())
        .collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(jobs.len());
    let mut unique = Vec::with_capacity(jobs.len());
    for mut job in jobs {
        if job.id.is_empty() {
            job.id = generate_job_id();
            while taken.contains(&job.id) {
                job.id = generate_job_id();
            }
            taken.insert(job.id.clone());
        }
        if !seen.insert(job.id.clone()) {
            tracing::warn!("duplicate job {} dropped from collection", &job.id);
            continue;
        }
        unique.push(job);
    }
    unique
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilters {
    pub search: String,
    pub department: String,
    pub status: Option<JobStatus>,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
}

impl JobFilters {
    pub fn matches(&self, job: &JobPosting) -> bool {
        self.matches_search(job)
            && (self.department.is_empty() || job.department == self.department)
            && self.status.is_none_or(|s| job.status == s)
            && self.employment_type.is_none_or(|t| job.employment_type == t)
    }

    fn matches_search(&self, job: &JobPosting) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&job.title, &job.department, &job.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(employment_type) = patch.employment_type {
            self.employment_type = employment_type;
        }
    }
}

/// Partial filter update. For the enum filters, `Some(None)` clears the
/// filter back to "match all".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPatch {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub status: Option<Option<JobStatus>>,
    #[serde(rename = "type", default, deserialize_with = "deserialize_some")]
    pub employment_type: Option<Option<EmploymentType>>,
}

impl FilterPatch {
    pub fn search(text: &str) -> Self {
        FilterPatch {
            search: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn department(name: &str) -> Self {
        FilterPatch {
            department: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn status(status: Option<JobStatus>) -> Self {
        FilterPatch {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn employment_type(employment_type: Option<EmploymentType>) -> Self {
        FilterPatch {
            employment_type: Some(employment_type),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobsState {
    pub jobs: Vec<JobPosting>,
    pub filters: JobFilters,
    pub pagination: Pagination,
}

impl JobsState {
    pub fn new(jobs: Vec<JobPosting>, items_per_page: usize) -> Self {
        let jobs = with_unique_ids(jobs);
        let total_items = jobs.len();
        JobsState {
            jobs,
            filters: JobFilters::default(),
            pagination: Pagination {
                current_page: 1,
                items_per_page: items_per_page.max(1),
                total_items,
            },
        }
    }
}

/// Job post form as submitted from the create/edit dialog.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub department: String,
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub location: String,
    #[serde(rename = "type", default)]
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
}

impl JobInput {
    pub fn into_new_posting(self) -> Result<JobPosting, validator::ValidationErrors> {
        self.validate()?;
        Ok(self.into_posting(generate_job_id(), Utc::now().date_naive(), 0))
    }

    /// Applies the form onto an existing posting, keeping its identifier,
    /// posted date and applicant count.
    pub fn apply_to(self, existing: &JobPosting) -> Result<JobPosting, validator::ValidationErrors> {
        self.validate()?;
        Ok(self.into_posting(
            existing.id.clone(),
            existing.posted_date,
            existing.applicant_count,
        ))
    }

    fn into_posting(self, id: String, posted_date: NaiveDate, applicant_count: u32) -> JobPosting {
        JobPosting {
            id,
            title: self.title,
            department: self.department,
            location: self.location,
            employment_type: self.employment_type,
            status: self.status,
            posted_date,
            applicant_count,
            description: Some(self.description).filter(|d| !d.is_empty()),
            requirements: Some(self.requirements).filter(|r| !r.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn posting(title: &str, department: &str, location: &str) -> JobPosting {
        JobPosting {
            id: generate_job_id(),
            title: title.into(),
            department: department.into(),
            location: location.into(),
            employment_type: EmploymentType::FullTime,
            status: JobStatus::Active,
            posted_date: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            applicant_count: 0,
            description: None,
            requirements: None,
        }
    }

    #[test]
    #[traced_test]
    fn test_generated_ids_are_base36() {
        let id = generate_job_id();
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    #[traced_test]
    fn test_search_matches_any_text_field_case_insensitively() {
        let job = posting("DevOps Engineer", "Engineering", "Seattle, WA");
        let mut filters = JobFilters::default();
        for needle in ["ENGINEER", "devops", "seattle", "ering"] {
            filters.search = needle.into();
            assert!(filters.matches(&job), "{needle} should match");
        }
        filters.search = "remote".into();
        assert!(!filters.matches(&job));
    }

    #[test]
    #[traced_test]
    fn test_filters_are_conjunctive() {
        let mut job = posting("HR Specialist", "Human Resources", "Remote");
        job.status = JobStatus::Draft;
        job.employment_type = EmploymentType::PartTime;

        let mut filters = JobFilters {
            search: "remote".into(),
            department: "Human Resources".into(),
            status: Some(JobStatus::Draft),
            employment_type: Some(EmploymentType::PartTime),
        };
        assert!(filters.matches(&job));
        filters.status = Some(JobStatus::Active);
        assert!(!filters.matches(&job));
        filters.status = None;
        filters.department = "Human".into();
        assert!(!filters.matches(&job), "department is an exact match");
    }

    #[test]
    #[traced_test]
    fn test_filter_patch_merges_shallowly() {
        let mut filters = JobFilters {
            search: "dev".into(),
            status: Some(JobStatus::Active),
            ..Default::default()
        };
        filters.merge(FilterPatch::department("Engineering"));
        assert_eq!(filters.search, "dev");
        assert_eq!(filters.department, "Engineering");
        assert_eq!(filters.status, Some(JobStatus::Active));

        let clear: FilterPatch = serde_json::from_str(r#"{"status": null}"#).unwrap();
        filters.merge(clear);
        assert_eq!(filters.status, None);
        assert_eq!(filters.department, "Engineering");
    }

    #[test]
    #[traced_test]
    fn test_job_input_requires_text_fields() {
        let input: JobInput = serde_json::from_str(
            r#"{"title": "  ", "department": "Design", "location": "Remote"}"#,
        )
        .unwrap();
        let errors = input.into_new_posting().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    #[traced_test]
    fn test_job_input_defaults() {
        let input: JobInput = serde_json::from_str(
            r#"{"title": "QA Engineer", "department": "Engineering", "location": "Remote"}"#,
        )
        .unwrap();
        let job = input.into_new_posting().unwrap();
        assert_eq!(job.employment_type, EmploymentType::FullTime);
        assert_eq!(job.status, JobStatus::Active);
        assert_eq!(job.applicant_count, 0);
        assert_eq!(job.description, None);
        assert_eq!(job.id.len(), 9);
    }

    #[test]
    #[traced_test]
    fn test_job_input_edit_keeps_identity() {
        let mut existing = posting("UX Designer", "Design", "San Francisco, CA");
        existing.applicant_count = 12;
        let input: JobInput = serde_json::from_str(
            r#"{"title": "Senior UX Designer", "department": "Design", "location": "Remote", "status": "closed"}"#,
        )
        .unwrap();
        let edited = input.apply_to(&existing).unwrap();
        assert_eq!(edited.id, existing.id);
        assert_eq!(edited.applicant_count, 12);
        assert_eq!(edited.posted_date, existing.posted_date);
        assert_eq!(edited.status, JobStatus::Closed);
    }

    #[test]
    #[traced_test]
    fn test_enums_parse_from_labels() {
        assert_eq!("Part-time".parse::<EmploymentType>(), Ok(EmploymentType::PartTime));
        assert_eq!("CLOSED".parse::<JobStatus>(), Ok(JobStatus::Closed));
        assert!("archived".parse::<JobStatus>().is_err());
        for t in [EmploymentType::FullTime, EmploymentType::Internship] {
            assert_eq!(t.to_string().parse::<EmploymentType>(), Ok(t));
        }
    }

    #[test]
    #[traced_test]
    fn test_posting_wire_names() {
        let job = posting("Data Scientist", "Data", "Remote");
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Full-time");
        assert_eq!(value["status"], "active");
        assert_eq!(value["postedDate"], "2025-05-01");
        assert_eq!(value["applicants"], 0);
    }
}
