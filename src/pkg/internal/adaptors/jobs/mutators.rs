use crate::pkg::internal::adaptors::jobs::spec::{
    FilterPatch, JobPosting, JobsState, generate_job_id, with_unique_ids,
};

use super::selectors::total_pages;

pub struct JobMutator<'a> {
    state: &'a mut JobsState,
}

impl<'a> JobMutator<'a> {
    pub fn new(state: &'a mut JobsState) -> Self {
        JobMutator { state }
    }

    fn sync_total(&mut self) {
        self.state.pagination.total_items = self.state.jobs.len();
    }

    pub fn set_all(&mut self, jobs: Vec<JobPosting>) {
        self.state.jobs = with_unique_ids(jobs);
        self.sync_total();
    }

    /// Appends a posting. An empty identifier gets a generated one; an
    /// identifier already present is rejected and the collection is left
    /// untouched.
    pub fn create(&mut self, mut job: JobPosting) -> Option<&JobPosting> {
        if job.id.is_empty() {
            job.id = generate_job_id();
            while self.state.jobs.iter().any(|j| j.id == job.id) {
                job.id = generate_job_id();
            }
        } else if self.state.jobs.iter().any(|j| j.id == job.id) {
            tracing::warn!("job {} already exists, ignoring create", &job.id);
            return None;
        }
        tracing::info!("created job {} ({})", &job.id, &job.title);
        self.state.jobs.push(job);
        self.sync_total();
        self.state.jobs.last()
    }

    /// Full-record replace matched by identifier.
    pub fn update(&mut self, job: JobPosting) -> Option<&JobPosting> {
        let slot = self.state.jobs.iter_mut().find(|j| j.id == job.id)?;
        *slot = job;
        tracing::info!("updated job {}", &slot.id);
        Some(&*slot)
    }

    /// Removes the posting and pulls the current page back onto the new last
    /// page when it would otherwise point past the end.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.state.jobs.len();
        self.state.jobs.retain(|j| j.id != id);
        if self.state.jobs.len() == before {
            return false;
        }
        self.sync_total();
        let pagination = &mut self.state.pagination;
        let max_page = total_pages(pagination.total_items, pagination.items_per_page);
        if pagination.current_page > max_page && max_page > 0 {
            pagination.current_page = max_page;
        }
        tracing::info!("deleted job {}", id);
        true
    }

    pub fn set_filters(&mut self, patch: FilterPatch) {
        self.state.filters.merge(patch);
        self.state.pagination.current_page = 1;
    }

    /// Stored as given; the page view clamps it when deriving rows.
    pub fn set_current_page(&mut self, page: usize) {
        self.state.pagination.current_page = page;
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.state.pagination.items_per_page = items_per_page.max(1);
        self.state.pagination.current_page = 1;
    }
}
