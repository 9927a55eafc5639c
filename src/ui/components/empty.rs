//! Empty state component renderer.
//!
//! Rendered in place of the card list when the last applied search returned
//! no jobs.

use crate::ui::viewmodel::EmptyState;
use std::fmt::Write;

/// Appends the empty results block.
///
/// # Example
///
/// ```rust
/// use jobboard::ui::components::render_empty_state;
/// use jobboard::ui::viewmodel::EmptyState;
///
/// let mut html = String::new();
/// render_empty_state(&mut html, &EmptyState {
///     message: "No jobs found.".to_string(),
///     subtitle: "Try again".to_string(),
/// });
/// assert!(html.starts_with("<div class=\"empty\" id=\"emptyState\">"));
/// ```
pub fn render_empty_state(out: &mut String, empty: &EmptyState) {
    let _ = write!(
        out,
        "<div class=\"empty\" id=\"emptyState\"><p>{}</p><p class=\"small\">{}</p></div>",
        empty.message, empty.subtitle
    );
}
