//! View model types representing renderable page state.
//!
//! View models are computed from `AppState` and consumed by the HTML painter or
//! by any other view layer. Every `String` here that ends up as page text is
//! already HTML-escaped; [`Binding`]s carry typed ids for event delegation and
//! are never drawn verbatim.
//!
//! # Example
//!
//! ```rust
//! use jobboard::ui::viewmodel::{RenderPlan, EmptyState};
//!
//! let plan = RenderPlan {
//!     cards: vec![],
//!     empty_state: Some(EmptyState {
//!         message: "No jobs found.".to_string(),
//!         subtitle: "Try another search.".to_string(),
//!     }),
//! };
//! assert!(plan.cards.is_empty());
//! ```

use crate::domain::JobId;

/// Complete page view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Current filter values.
    pub search_bar: SearchBarView,

    /// Job cards and the empty-results block.
    pub jobs: RenderPlan,

    /// A search is outstanding.
    pub loading: bool,

    /// Shown when the last search failed and stale results remain.
    pub search_notice: Option<String>,

    /// The "post a job" form.
    pub post_form: PostFormView,
}

/// Render instructions for the jobs list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// One entry per job, in list order.
    pub cards: Vec<CardView>,

    /// Present exactly when the last applied search returned no jobs.
    pub empty_state: Option<EmptyState>,
}

/// One job card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Escaped job id, used in element ids and data attributes.
    pub key: String,
    pub title: String,
    pub city: String,
    pub category: String,
    /// Pay amount formatted for display (`60`, `12.5`).
    pub pay: String,
    pub pay_type: String,
    /// Description, or the placeholder when the job has none.
    pub description: String,
    /// "posted … ago" hint.
    pub posted: Option<String>,
    /// The "Apply" toggle.
    pub apply: Binding,
    /// Present only while the panel is open.
    pub panel: Option<PanelView>,
}

/// The application sub-panel of an open card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub name: String,
    pub contact: String,
    pub message: String,
    /// The "Send" control.
    pub send: Binding,
    /// Status line: blank, "Sending...", "Sent ✅" or "Error ❌".
    pub status: String,
}

/// A clickable control bound to one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub control: Control,
    pub job_id: JobId,
}

/// Kinds of per-card controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Flips the application panel.
    ToggleApply,
    /// Submits the application.
    SendApplication,
}

impl Control {
    /// Data attribute carrying the job id on the rendered control.
    #[must_use]
    pub const fn attribute(self) -> &'static str {
        match self {
            Self::ToggleApply => "data-apply",
            Self::SendApplication => "data-send",
        }
    }
}

/// Empty results message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Current search bar values, escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarView {
    pub query: String,
    pub city: String,
    pub category: String,
}

/// The "post a job" form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFormView {
    /// `(input name, escaped value)` in form order.
    pub fields: Vec<(&'static str, String)>,
    /// Status line under the submit button.
    pub status: String,
}
