use chrono::NaiveDate;
use serde::Serialize;

use crate::pkg::internal::adaptors::jobs::spec::{
    EmploymentType, JobFilters, JobPosting, JobStatus, JobsState, Pagination,
};

pub fn total_pages(total: usize, items_per_page: usize) -> usize {
    total.div_ceil(items_per_page.max(1))
}

/// Clamps a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

pub fn filter_jobs<'a>(jobs: &'a [JobPosting], filters: &JobFilters) -> Vec<&'a JobPosting> {
    jobs.iter().filter(|job| filters.matches(job)).collect()
}

/// Raw window `[(page - 1) * per_page, page * per_page)`; a page past the end
/// yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    let end = start.saturating_add(items_per_page);
    let len = items.len();
    &items[start.min(len)..end.min(len)]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub department: &'a str,
    pub location: &'a str,
    pub posted_date: NaiveDate,
    pub status: JobStatus,
    pub applicant_count: u32,
}

impl<'a> From<&'a JobPosting> for JobRow<'a> {
    fn from(job: &'a JobPosting) -> Self {
        JobRow {
            id: &job.id,
            title: &job.title,
            department: &job.department,
            location: &job.location,
            posted_date: job.posted_date,
            status: job.status,
            applicant_count: job.applicant_count,
        }
    }
}

/// Dropdown options. Always computed over the whole collection so a filter
/// never shrinks its own menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facets<'a> {
    pub departments: Vec<&'a str>,
    pub statuses: Vec<JobStatus>,
    pub types: Vec<EmploymentType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPage<'a> {
    pub rows: Vec<JobRow<'a>>,
    pub requested_page: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_filtered: usize,
    pub items_per_page: usize,
    /// 1-based inclusive bounds of the rows on screen.
    pub showing: Option<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats<'a> {
    pub active_jobs: usize,
    pub total_applicants: u64,
    pub recent: Vec<JobRow<'a>>,
}

pub struct JobSelector<'a> {
    state: &'a JobsState,
}

impl<'a> JobSelector<'a> {
    pub fn new(state: &'a JobsState) -> Self {
        JobSelector { state }
    }

    pub fn get_all(&self) -> &'a [JobPosting] {
        &self.state.jobs
    }

    pub fn get_by_id(&self, id: &str) -> Option<&'a JobPosting> {
        self.state.jobs.iter().find(|j| j.id == id)
    }

    pub fn get_by_department(&self, department: &str) -> Vec<&'a JobPosting> {
        self.state
            .jobs
            .iter()
            .filter(|j| j.department == department)
            .collect()
    }

    pub fn filters(&self) -> &'a JobFilters {
        &self.state.filters
    }

    pub fn pagination(&self) -> &'a Pagination {
        &self.state.pagination
    }

    pub fn filtered(&self) -> Vec<&'a JobPosting> {
        filter_jobs(&self.state.jobs, &self.state.filters)
    }

    pub fn page(&self) -> JobPage<'a> {
        let matches = self.filtered();
        let per_page = self.state.pagination.items_per_page.max(1);
        let requested = self.state.pagination.current_page;
        let total_filtered = matches.len();
        let total_pages = total_pages(total_filtered, per_page);
        let current_page = clamp_page(requested, total_pages);
        let rows: Vec<JobRow<'a>> = paginate(&matches, current_page, per_page)
            .iter()
            .map(|job| JobRow::from(*job))
            .collect();
        let start = (current_page - 1) * per_page;
        let showing = (!rows.is_empty()).then(|| (start + 1, start + rows.len()));
        JobPage {
            rows,
            requested_page: requested,
            current_page,
            total_pages,
            total_filtered,
            items_per_page: per_page,
            showing,
        }
    }

    pub fn facets(&self) -> Facets<'a> {
        let mut departments: Vec<&'a str> = Vec::new();
        let mut types: Vec<EmploymentType> = Vec::new();
        for job in &self.state.jobs {
            if !departments.contains(&job.department.as_str()) {
                departments.push(&job.department);
            }
            if !types.contains(&job.employment_type) {
                types.push(job.employment_type);
            }
        }
        Facets {
            departments,
            statuses: JobStatus::ALL.to_vec(),
            types,
        }
    }

    pub fn stats(&self, recent_limit: usize) -> JobStats<'a> {
        let jobs = &self.state.jobs;
        JobStats {
            active_jobs: jobs.iter().filter(|j| j.status == JobStatus::Active).count(),
            total_applicants: jobs.iter().map(|j| u64::from(j.applicant_count)).sum(),
            recent: jobs.iter().take(recent_limit).map(JobRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::{
        adaptors::jobs::{mutators::JobMutator, spec::FilterPatch},
        seed,
    };
    use crate::prelude::Result;

    fn seeded() -> JobsState {
        JobsState::new(seed::jobs(), 10)
    }

    fn titles<'a>(page: &JobPage<'a>) -> Vec<&'a str> {
        page.rows.iter().map(|r| r.title).collect()
    }

    #[test]
    #[traced_test]
    fn test_seed_pages_split_ten_and_two() -> Result<()> {
        let mut state = seeded();
        assert_eq!(JobSelector::new(&state).page().rows.len(), 10);

        JobMutator::new(&mut state).set_current_page(2);
        let page = JobSelector::new(&state).page();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.showing, Some((11, 12)));
        assert_eq!(titles(&page), vec!["Sales Development Representative", "Backend Developer"]);
        Ok(())
    }

    #[test]
    #[traced_test]
    fn test_raw_window_past_end_is_empty() {
        let state = seeded();
        let matches = JobSelector::new(&state).filtered();
        assert_eq!(paginate(&matches, 1, 10).len(), 10);
        assert_eq!(paginate(&matches, 2, 10).len(), 2);
        assert!(paginate(&matches, 3, 10).is_empty());
    }

    #[test]
    #[traced_test]
    fn test_out_of_range_page_is_clamped_in_view() {
        let mut state = seeded();
        JobMutator::new(&mut state).set_current_page(3);
        let page = JobSelector::new(&state).page();
        assert_eq!(page.requested_page, 3);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.rows.len(), 2);

        JobMutator::new(&mut state).set_current_page(0);
        assert_eq!(JobSelector::new(&state).page().current_page, 1);
    }

    #[test]
    #[traced_test]
    fn test_status_filter_resets_page_and_restricts_rows() {
        let mut state = seeded();
        let mut mutator = JobMutator::new(&mut state);
        mutator.set_current_page(2);
        mutator.set_filters(FilterPatch::status(Some(JobStatus::Active)));
        let page = JobSelector::new(&state).page();
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_filtered, 11);
        assert!(page.rows.iter().all(|r| r.status == JobStatus::Active));
    }

    #[test]
    #[traced_test]
    fn test_search_engineer_matches_titles() {
        let mut state = seeded();
        JobMutator::new(&mut state).set_filters(FilterPatch::search("eNgInEeR"));
        let page = JobSelector::new(&state).page();
        let found = titles(&page);
        assert!(found.contains(&"Senior Software Engineer"));
        assert!(found.contains(&"DevOps Engineer"));
        // "Engineering" department also matches the substring
        assert!(found.contains(&"Frontend Developer"));
    }

    #[test]
    #[traced_test]
    fn test_empty_result_has_zero_pages() {
        let mut state = seeded();
        JobMutator::new(&mut state).set_filters(FilterPatch::search("astronaut"));
        let page = JobSelector::new(&state).page();
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.showing, None);
    }

    #[test]
    #[traced_test]
    fn test_facets_ignore_active_filters() {
        let mut state = seeded();
        JobMutator::new(&mut state).set_filters(FilterPatch::department("Design"));
        let selector = JobSelector::new(&state);
        assert_eq!(selector.page().total_filtered, 1);
        let facets = selector.facets();
        assert_eq!(
            facets.departments,
            vec![
                "Engineering",
                "Product",
                "Design",
                "Marketing",
                "Data",
                "Customer Success",
                "Human Resources",
                "Sales"
            ]
        );
        assert_eq!(
            facets.types,
            vec![EmploymentType::FullTime, EmploymentType::Contract, EmploymentType::PartTime]
        );
        assert_eq!(facets.statuses, JobStatus::ALL.to_vec());
    }

    #[test]
    #[traced_test]
    fn test_stats_over_seed() {
        let state = seeded();
        let stats = JobSelector::new(&state).stats(5);
        assert_eq!(stats.active_jobs, 11);
        assert_eq!(stats.total_applicants, 141);
        assert_eq!(stats.recent.len(), 5);
        assert_eq!(stats.recent[0].title, "Senior Software Engineer");
    }

    #[test]
    #[traced_test]
    fn test_lookups() {
        let state = seeded();
        let selector = JobSelector::new(&state);
        assert_eq!(selector.get_by_id("8").map(|j| j.title.as_str()), Some("DevOps Engineer"));
        assert!(selector.get_by_id("99").is_none());
        assert_eq!(selector.get_by_department("Engineering").len(), 4);
    }

    #[test]
    #[traced_test]
    fn test_page_math() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(clamp_page(9, 0), 1);
        assert_eq!(clamp_page(9, 4), 4);
    }
}
