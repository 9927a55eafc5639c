//! Executes [`ApiRequest`]s against a [`JobBoardApi`] implementation.
//!
//! The worker is the only place where requests meet the network. It turns each
//! request into exactly one [`ApiResponse`], folding every error into the
//! matching failure variant so the controller never sees a `Result`.

use crate::api::client::JobBoardApi;
use crate::api::messages::{ApiRequest, ApiResponse};
use crate::domain::error::Result;
use tracing::Instrument;

/// Request executor wrapping an API implementation.
#[derive(Debug)]
pub struct ApiWorker<A> {
    api: A,
}

impl<A: JobBoardApi> ApiWorker<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Standardizes logging of a finished API call.
    fn handle_api_result<T, S, F>(
        operation: &str,
        result: Result<T>,
        on_success: S,
        on_failure: F,
    ) -> ApiResponse
    where
        S: FnOnce(T) -> ApiResponse,
        F: FnOnce(String) -> ApiResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "api call successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "api call failed");
                on_failure(format!("{operation}: {e}"))
            }
        }
    }

    /// Runs one request to completion and reports its outcome.
    pub async fn handle_request(&self, request: ApiRequest) -> ApiResponse {
        let span = tracing::debug_span!("api_request", request_type = ?request);

        async move {
            match request {
                ApiRequest::SearchJobs { token, filters } => Self::handle_api_result(
                    "search jobs",
                    self.api.search_jobs(&filters).await,
                    |jobs| {
                        tracing::debug!(token = token, job_count = jobs.len(), "jobs loaded");
                        ApiResponse::JobsLoaded { token, jobs }
                    },
                    |message| ApiResponse::SearchFailed { token, message },
                ),
                ApiRequest::CreateJob { payload } => Self::handle_api_result(
                    "create job",
                    self.api.create_job(&payload).await,
                    |()| ApiResponse::JobCreated,
                    |message| ApiResponse::CreateFailed { message },
                ),
                ApiRequest::ApplyToJob { job_id, attempt, payload } => {
                    let result = self.api.apply_to_job(&job_id, &payload).await;
                    let failed_id = job_id.clone();
                    Self::handle_api_result(
                        "apply to job",
                        result,
                        |()| ApiResponse::ApplicationSent { job_id, attempt },
                        |message| ApiResponse::ApplicationFailed {
                            job_id: failed_id,
                            attempt,
                            message,
                        },
                    )
                }
            }
        }
        .instrument(span)
        .await
    }
}
