//! Application state container and view model computation.
//!
//! [`AppState`] is the single source of truth for the widget. It is created at
//! startup, mutated only by the event handler, and handed read-only to the
//! render projector.
//!
//! # State Components
//!
//! - **List**: authoritative jobs plus search bookkeeping ([`JobList`])
//! - **Cards**: per-job panel state ([`CardStore`])
//! - **Filters**: current search bar values
//! - **Draft**: current "post a job" form values and its status line
//! - **Search notice**: set when the last search failed
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::AppState;
//!
//! let state = AppState::new();
//! let page = state.compute_viewmodel();
//! assert!(page.jobs.cards.is_empty());
//! assert!(page.jobs.empty_state.is_none());
//! ```

use crate::api::SearchFilters;
use crate::app::cards::CardStore;
use crate::app::modes::{FilterField, PostStatus};
use crate::app::sync::JobList;
use crate::domain::JobDraft;
use crate::ui::helpers::escaped;
use crate::ui::renderer::{project, project_post_form, project_search_bar};
use crate::ui::viewmodel::PageView;
use chrono::{DateTime, Utc};

/// Notice shown when a search fails and the previous results stay on screen.
pub const SEARCH_FAILED_NOTICE: &str = "Could not load jobs. Showing previous results.";

/// Central application state container.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub list: JobList,
    pub cards: CardStore,
    pub filters: SearchFilters,
    pub draft: JobDraft,
    pub post_status: PostStatus,
    pub search_notice: Option<String>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, field: FilterField, value: String) {
        let slot = match field {
            FilterField::Query => &mut self.filters.query,
            FilterField::City => &mut self.filters.city,
            FilterField::Category => &mut self.filters.category,
        };
        *slot = value;
    }

    pub fn clear_filters(&mut self) {
        self.filters = SearchFilters::default();
    }

    /// Computes the page view model using the current wall clock.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageView {
        self.compute_viewmodel_at(Utc::now())
    }

    /// Computes the page view model as of `now`.
    ///
    /// `now` only affects the "posted … ago" hints on cards.
    #[must_use]
    pub fn compute_viewmodel_at(&self, now: DateTime<Utc>) -> PageView {
        PageView {
            search_bar: project_search_bar(&self.filters),
            jobs: project(&self.list, &self.cards, now),
            loading: self.list.loading,
            search_notice: self.search_notice.as_deref().map(escaped),
            post_form: project_post_form(&self.draft, self.post_status),
        }
    }
}
