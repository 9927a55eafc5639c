//! Actions representing side effects to be executed by the controller driver.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! [`Controller`](crate::app::Controller) executes them in order: API requests
//! go to the [`ApiWorker`](crate::api::ApiWorker), navigation is surfaced to the
//! view layer.
//!
//! # Example
//!
//! ```rust
//! use jobboard::api::{ApiRequest, SearchFilters};
//! use jobboard::app::{Action, Section};
//!
//! let actions = vec![
//!     Action::Api(ApiRequest::SearchJobs { token: 1, filters: SearchFilters::default() }),
//!     Action::Navigate(Section::Jobs),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::api::ApiRequest;
use crate::app::modes::Section;

/// Commands representing side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues a request to the job board API and feeds the response back as
    /// [`Event::ApiResponse`](crate::app::Event::ApiResponse).
    Api(ApiRequest),

    /// Directs the view to a named section.
    Navigate(Section),
}
