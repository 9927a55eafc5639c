//! Persistent event delegation.
//!
//! The view layer binds one listener per event type at the page root and
//! reports what was hit: the data attribute of a clicked control, the id of an
//! edited input, the name of an edited form field. These functions resolve such
//! reports to controller [`Event`]s, so nothing has to be re-bound after a
//! render.
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::Event;
//! use jobboard::domain::JobId;
//! use jobboard::ui::delegate;
//!
//! assert_eq!(
//!     delegate::on_click("data-apply", "42"),
//!     Some(Event::TogglePanel { job_id: JobId::new("42") })
//! );
//! ```

use crate::app::modes::{ApplicantField, FilterField};
use crate::app::Event;
use crate::domain::{DraftField, JobId};
use crate::ui::viewmodel::{Binding, Control};

impl Binding {
    /// Event raised when this control is activated.
    #[must_use]
    pub fn event(&self) -> Event {
        match self.control {
            Control::ToggleApply => Event::TogglePanel {
                job_id: self.job_id.clone(),
            },
            Control::SendApplication => Event::SendApplication {
                job_id: self.job_id.clone(),
            },
        }
    }
}

/// Resolves a click on an element carrying `attribute="value"`.
///
/// Recognizes the per-card `data-apply` / `data-send` attributes and the
/// `searchBtn` / `refreshBtn` element ids.
#[must_use]
pub fn on_click(attribute: &str, value: &str) -> Option<Event> {
    let control = match attribute {
        "data-apply" => Control::ToggleApply,
        "data-send" => Control::SendApplication,
        "id" => {
            return match value {
                "searchBtn" => Some(Event::Search),
                "refreshBtn" => Some(Event::Refresh),
                _ => None,
            }
        }
        _ => return None,
    };

    if value.is_empty() {
        return None;
    }

    Some(
        Binding {
            control,
            job_id: JobId::new(value),
        }
        .event(),
    )
}

/// Resolves an edit of the input with id `element_id`.
///
/// Search bar inputs are `q`, `city` and `category`; panel inputs are
/// `name-{id}`, `contact-{id}` and `msg-{id}`.
#[must_use]
pub fn on_input(element_id: &str, value: &str) -> Option<Event> {
    let filter = match element_id {
        "q" => Some(FilterField::Query),
        "city" => Some(FilterField::City),
        "category" => Some(FilterField::Category),
        _ => None,
    };
    if let Some(field) = filter {
        return Some(Event::SetFilter {
            field,
            value: value.to_string(),
        });
    }

    let (field, job_id) = [
        ("name-", ApplicantField::Name),
        ("contact-", ApplicantField::Contact),
        ("msg-", ApplicantField::Message),
    ]
    .into_iter()
    .find_map(|(prefix, field)| element_id.strip_prefix(prefix).map(|id| (field, id)))?;

    if job_id.is_empty() {
        return None;
    }

    Some(Event::SetApplicantField {
        job_id: JobId::new(job_id),
        field,
        value: value.to_string(),
    })
}

/// Resolves an edit of the post form input named `name`.
#[must_use]
pub fn on_form_input(name: &str, value: &str) -> Option<Event> {
    DraftField::from_name(name).map(|field| Event::SetDraftField {
        field,
        value: value.to_string(),
    })
}

/// Resolves a form submission.
#[must_use]
pub fn on_submit(form_id: &str) -> Option<Event> {
    (form_id == "postForm").then_some(Event::SubmitJobPost)
}
