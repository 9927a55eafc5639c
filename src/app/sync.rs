//! Authoritative job list and its reconciliation with the card store.
//!
//! [`JobList::replace_list`] is the only way the list changes. After every call
//! the card store holds exactly one entry per job id in the list and none for
//! any other id.

use crate::app::cards::CardStore;
use crate::domain::{Job, JobId};
use std::collections::HashSet;

/// Jobs from the most recent applied search, plus search bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct JobList {
    jobs: Vec<Job>,

    /// Set when the last applied search returned zero jobs.
    pub no_results: bool,

    /// Set while a search is outstanding.
    pub loading: bool,

    /// Token of the most recently issued search.
    latest_token: u64,
}

impl JobList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    #[must_use]
    pub const fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Issues a new search token and marks the list as loading.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_token += 1;
        self.loading = true;
        self.latest_token
    }

    /// Whether a response carrying `token` is still the one to apply.
    #[must_use]
    pub const fn is_current(&self, token: u64) -> bool {
        token == self.latest_token
    }

    /// Replaces the list wholesale and reconciles `cards` with it.
    ///
    /// 1. The list becomes `new_jobs`, in server order
    /// 2. Card entries for ids no longer listed are pruned
    /// 3. Every listed id is ensured
    ///
    /// The "no results" flag follows the new list length.
    pub fn replace_list(&mut self, new_jobs: Vec<Job>, cards: &mut CardStore) {
        let _span = tracing::debug_span!("replace_list", job_count = new_jobs.len()).entered();

        self.jobs = new_jobs;

        let valid_ids: HashSet<&JobId> = self.jobs.iter().map(|job| &job.id).collect();
        let pruned = cards.prune(&valid_ids);
        for job in &self.jobs {
            cards.ensure(&job.id);
        }

        self.no_results = self.jobs.is_empty();
        self.loading = false;

        tracing::debug!(
            pruned = pruned,
            cards = cards.len(),
            no_results = self.no_results,
            "job list replaced"
        );
    }
}
