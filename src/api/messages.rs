//! Request and response protocol between the controller and the API worker.
//!
//! The controller never calls the HTTP client directly. It emits an
//! [`ApiRequest`] inside an action, the [`ApiWorker`](crate::api::ApiWorker)
//! executes it, and the outcome comes back as an [`ApiResponse`] event. Both
//! types are serde-serializable so they can be logged or replayed verbatim.

use crate::domain::{ApplyPayload, Job, JobId, NewJobPayload};
use serde::{Deserialize, Serialize};

/// Category picker value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All categories";

/// Search filter values as typed into the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub query: String,
    pub city: String,
    #[serde(default)]
    pub category: String,
}

impl SearchFilters {
    /// Returns the query-string pairs to send, omitting blank filters.
    ///
    /// Values are trimmed first, so a filter consisting only of whitespace is
    /// treated as absent. The server then sees "no filter" rather than an
    /// empty-string filter.
    ///
    /// ```
    /// use jobboard::api::SearchFilters;
    ///
    /// let filters = SearchFilters {
    ///     query: "cook".to_string(),
    ///     city: "  ".to_string(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(filters.query_pairs(), vec![("q", "cook")]);
    /// ```
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let category = self.category.trim();
        let category = if category == ALL_CATEGORIES { "" } else { category };

        [("q", self.query.trim()), ("city", self.city.trim()), ("category", category)]
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Requests issued by the controller, one per user action at most.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiRequest {
    /// List jobs matching the filters.
    SearchJobs {
        /// Sequence number of this search; only the latest is applied.
        token: u64,
        filters: SearchFilters,
    },

    /// Publish a new job.
    CreateJob { payload: NewJobPayload },

    /// Submit an application to one job.
    ApplyToJob {
        job_id: JobId,
        /// Send attempt of the card that issued the request.
        attempt: u64,
        payload: ApplyPayload,
    },
}

/// Outcomes reported back to the controller.
///
/// Every failure carries only a human-readable message; callers react to the
/// variant, never to the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiResponse {
    JobsLoaded { token: u64, jobs: Vec<Job> },
    SearchFailed { token: u64, message: String },
    JobCreated,
    CreateFailed { message: String },
    ApplicationSent { job_id: JobId, attempt: u64 },
    ApplicationFailed { job_id: JobId, attempt: u64, message: String },
}
