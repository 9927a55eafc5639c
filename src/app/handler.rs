//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes view events and API
//! responses, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the view layer (via [`delegate`](crate::ui::delegate))
//!    or as API responses
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState`, `JobList` and `CardStore`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Search**: `Initialize`, `SetFilter`, `Search`, `Refresh`
//! - **Posting**: `SetDraftField`, `SubmitJobPost`
//! - **Cards**: `TogglePanel`, `SetApplicantField`, `SendApplication`
//! - **API**: `ApiResponse` with typed response variants
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (render, actions) = handle_event(&mut state, &Event::Search)?;
//! assert!(render);
//! assert!(matches!(actions[0], Action::Api(_)));
//! # Ok::<(), jobboard::JobBoardError>(())
//! ```

use crate::api::{ApiRequest, ApiResponse};
use crate::app::modes::{ApplicantField, FilterField, PostStatus, Section, Submission};
use crate::app::state::SEARCH_FAILED_NOTICE;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{DraftField, JobDraft, JobId};

/// Events triggered by the view layer or by API responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Initial load with whatever filters are set (normally none).
    Initialize,
    /// Updates one search bar input.
    SetFilter { field: FilterField, value: String },
    /// Searches with the current filters.
    Search,
    /// Clears the filters, then searches.
    Refresh,
    /// Updates one post form input.
    SetDraftField { field: DraftField, value: String },
    /// Submits the post form.
    SubmitJobPost,
    /// Flips one card's application panel.
    TogglePanel { job_id: JobId },
    /// Updates one input of a card's application panel.
    SetApplicantField {
        job_id: JobId,
        field: ApplicantField,
        value: String,
    },
    /// Sends the application typed into a card's panel.
    SendApplication { job_id: JobId },
    /// Wraps the outcome of an [`ApiRequest`].
    ApiResponse(ApiResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(needs_render, actions)`. `needs_render` is `false` when the event changed
/// nothing visible (stale responses, unknown card ids).
///
/// # Errors
///
/// Reserved for failures that cannot be expressed as state; every failure the
/// widget knows about (transport, invalid draft, unknown card) is folded into
/// state and logged instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Initialize | Event::Search => Ok((true, vec![start_search(state)])),
        Event::Refresh => {
            tracing::debug!("clearing filters before reload");
            state.clear_filters();
            Ok((true, vec![start_search(state)]))
        }
        Event::SetFilter { field, value } => {
            state.set_filter(*field, value.clone());
            Ok((false, vec![]))
        }
        Event::SetDraftField { field, value } => {
            state.draft.set(*field, value.clone());
            Ok((false, vec![]))
        }
        Event::SubmitJobPost => match state.draft.to_payload() {
            Ok(payload) => {
                tracing::debug!(title = %payload.title, "posting job");
                state.post_status = PostStatus::Posting;
                Ok((true, vec![Action::Api(ApiRequest::CreateJob { payload })]))
            }
            Err(e) => {
                tracing::debug!(error = %e, "job draft rejected");
                state.post_status = PostStatus::Failed;
                Ok((true, vec![]))
            }
        },
        Event::TogglePanel { job_id } => match state.cards.toggle_panel(job_id) {
            Ok(open) => {
                tracing::debug!(job_id = %job_id, panel_open = open, "panel toggled");
                Ok((true, vec![]))
            }
            Err(e) => {
                tracing::debug!(error = %e, "ignoring toggle");
                Ok((false, vec![]))
            }
        },
        Event::SetApplicantField { job_id, field, value } => {
            if let Err(e) = state.cards.set_field(job_id, *field, value.clone()) {
                tracing::debug!(error = %e, "ignoring applicant field update");
            }
            Ok((false, vec![]))
        }
        Event::SendApplication { job_id } => {
            let Some(card) = state.cards.get(job_id) else {
                tracing::debug!(job_id = %job_id, "send ignored, unknown card");
                return Ok((false, vec![]));
            };
            if !card.panel_open {
                tracing::debug!(job_id = %job_id, "send ignored, panel not open");
                return Ok((false, vec![]));
            }
            if card.submission == Submission::Sending {
                tracing::debug!(job_id = %job_id, "send ignored, application already in flight");
                return Ok((false, vec![]));
            }

            let attempt = state.cards.begin_send(job_id)?;
            let payload = state
                .cards
                .get(job_id)
                .map(|card| card.application())
                .unwrap_or_default();

            tracing::debug!(job_id = %job_id, attempt = attempt, "sending application");
            Ok((
                true,
                vec![Action::Api(ApiRequest::ApplyToJob {
                    job_id: job_id.clone(),
                    attempt,
                    payload,
                })],
            ))
        }
        Event::ApiResponse(response) => Ok(handle_response(state, response)),
    }
}

fn start_search(state: &mut AppState) -> Action {
    let token = state.list.begin_search();
    tracing::debug!(token = token, filters = ?state.filters, "search issued");
    Action::Api(ApiRequest::SearchJobs {
        token,
        filters: state.filters.clone(),
    })
}

fn handle_response(state: &mut AppState, response: &ApiResponse) -> (bool, Vec<Action>) {
    match response {
        ApiResponse::JobsLoaded { token, jobs } => {
            if !state.list.is_current(*token) {
                tracing::debug!(
                    token = token,
                    latest = state.list.latest_token(),
                    "discarding stale search response"
                );
                return (false, vec![]);
            }
            state.list.replace_list(jobs.clone(), &mut state.cards);
            state.search_notice = None;
            (true, vec![])
        }
        ApiResponse::SearchFailed { token, message } => {
            if !state.list.is_current(*token) {
                tracing::debug!(token = token, "discarding stale search failure");
                return (false, vec![]);
            }
            tracing::warn!(error = %message, "search failed, keeping previous results");
            state.list.loading = false;
            state.search_notice = Some(SEARCH_FAILED_NOTICE.to_string());
            (true, vec![])
        }
        ApiResponse::JobCreated => {
            tracing::debug!("job posted, reloading list");
            state.draft = JobDraft::default();
            state.post_status = PostStatus::Posted;
            (true, vec![start_search(state), Action::Navigate(Section::Jobs)])
        }
        ApiResponse::CreateFailed { message } => {
            tracing::warn!(error = %message, "job post failed, keeping draft");
            state.post_status = PostStatus::Failed;
            (true, vec![])
        }
        ApiResponse::ApplicationSent { job_id, attempt } => {
            settle_application(state, job_id, *attempt, Submission::Sent)
        }
        ApiResponse::ApplicationFailed { job_id, attempt, message } => {
            tracing::warn!(job_id = %job_id, error = %message, "application failed");
            settle_application(state, job_id, *attempt, Submission::Error)
        }
    }
}

fn settle_application(
    state: &mut AppState,
    job_id: &JobId,
    attempt: u64,
    outcome: Submission,
) -> (bool, Vec<Action>) {
    let current = state.cards.get(job_id).map(|card| card.attempt);
    if current != Some(attempt) {
        tracing::debug!(
            job_id = %job_id,
            attempt = attempt,
            current = ?current,
            "discarding application response for superseded attempt or pruned card"
        );
        return (false, vec![]);
    }

    match state.cards.set_submission(job_id, outcome) {
        Ok(()) => (true, vec![]),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring application response");
            (false, vec![])
        }
    }
}
