//! Job collection store.

use super::{Store, SubscriptionId};
use crate::domain::JobSummary;

/// Job postings in the order the listing service returned them.
#[derive(Debug, Default)]
pub struct JobStore {
    inner: Store<Vec<JobSummary>>,
}

impl JobStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection.
    pub fn replace(&mut self, jobs: Vec<JobSummary>) {
        tracing::debug!(job_count = jobs.len(), "job collection replaced");
        self.inner.set(jobs);
    }

    #[must_use]
    pub fn jobs(&self) -> &[JobSummary] {
        self.inner.get()
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&JobSummary> {
        self.jobs().iter().find(|job| job.id == id)
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Vec<JobSummary>) + 'static,
    {
        self.inner.subscribe(callback)
    }
}
