//! Render projector and top-level rendering entry point.
//!
//! The renderer follows a two-step process:
//!
//! 1. **Projection**: pure functions turn state into view models
//!    ([`project`] for the job list)
//! 2. **Painting**: [`components`](crate::ui::components) turn view models into HTML
//!
//! Projection escapes every interpolated string, so painting never has to.
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::AppState;
//! use jobboard::ui::render;
//!
//! let state = AppState::new();
//! let html = render(&state);
//! assert!(html.contains("id=\"jobsList\""));
//! ```

use crate::api::SearchFilters;
use crate::app::cards::{CardState, CardStore};
use crate::app::modes::PostStatus;
use crate::app::sync::JobList;
use crate::app::AppState;
use crate::domain::{Job, JobDraft};
use crate::ui::components;
use crate::ui::helpers::escaped;
use crate::ui::viewmodel::{
    Binding, CardView, Control, EmptyState, PanelView, PostFormView, RenderPlan, SearchBarView,
};
use chrono::{DateTime, Utc};

/// Shown in place of a missing description.
pub const NO_DESCRIPTION: &str = "No description.";

/// Renders the whole widget to an HTML fragment.
#[must_use]
pub fn render(state: &AppState) -> String {
    let page = state.compute_viewmodel();
    components::render_page(&page)
}

/// Maps the job list and card states to render instructions.
///
/// For each job, in list order: header fields, the "Apply" toggle, and the
/// application panel only if that card's panel is open. The empty-results block
/// is present exactly when the last applied search returned no jobs.
#[must_use]
pub fn project(list: &JobList, cards: &CardStore, now: DateTime<Utc>) -> RenderPlan {
    let closed = CardState::default();

    let cards: Vec<CardView> = list
        .jobs()
        .iter()
        .map(|job| project_card(job, cards.get(&job.id).unwrap_or(&closed), now))
        .collect();

    let empty_state = list.no_results.then(|| EmptyState {
        message: "No jobs found.".to_string(),
        subtitle: "Try a different search, or post the first job.".to_string(),
    });

    RenderPlan { cards, empty_state }
}

fn project_card(job: &Job, card: &CardState, now: DateTime<Utc>) -> CardView {
    let description = job
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map_or_else(|| NO_DESCRIPTION.to_string(), escaped);

    let panel = card.panel_open.then(|| PanelView {
        name: escaped(&card.applicant_name),
        contact: escaped(&card.applicant_contact),
        message: escaped(&card.applicant_message),
        send: Binding {
            control: Control::SendApplication,
            job_id: job.id.clone(),
        },
        status: card.submission.status_text().to_string(),
    });

    CardView {
        key: escaped(job.id.as_str()),
        title: escaped(&job.title),
        city: escaped(&job.city),
        category: escaped(&job.category),
        pay: job.pay_amount.to_string(),
        pay_type: escaped(&job.pay_type),
        description,
        posted: job.posted_ago(now).map(|label| escaped(&label)),
        apply: Binding {
            control: Control::ToggleApply,
            job_id: job.id.clone(),
        },
        panel,
    }
}

/// Echoes the filter values back into the search bar.
#[must_use]
pub fn project_search_bar(filters: &SearchFilters) -> SearchBarView {
    SearchBarView {
        query: escaped(&filters.query),
        city: escaped(&filters.city),
        category: escaped(&filters.category),
    }
}

/// Echoes the draft back into the post form along with its status line.
#[must_use]
pub fn project_post_form(draft: &JobDraft, status: PostStatus) -> PostFormView {
    let fields = vec![
        ("title", escaped(&draft.title)),
        ("city", escaped(&draft.city)),
        ("category", escaped(&draft.category)),
        ("pay_type", escaped(&draft.pay_type)),
        ("pay_amount", escaped(&draft.pay_amount)),
        ("duration_hours", escaped(&draft.duration_hours)),
        ("description", escaped(&draft.description)),
    ];

    PostFormView {
        fields,
        status: status.status_text().to_string(),
    }
}
