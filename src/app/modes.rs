//! Status and field enums driving the widget state machines.
//!
//! # State Machine
//!
//! Each card's application panel moves through:
//!
//! ```text
//! Closed --toggle--> Open(Idle) --send--> Open(Sending) --ok--> Open(Sent)
//!                                                       \--err--> Open(Error)
//! Open(*) --toggle--> Closed          Open(Sent | Error) --send--> Open(Sending)
//! ```
//!
//! Visibility and [`Submission`] are independent: closing a panel leaves its
//! submission status alone, so an in-flight send still lands.
//!
//! The post form has its own [`PostStatus`] line.

use serde::{Deserialize, Serialize};

/// Submission status of one card's application panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    /// Nothing sent yet in this panel session.
    #[default]
    Idle,
    /// A request is outstanding.
    Sending,
    /// The last attempt succeeded.
    Sent,
    /// The last attempt failed. The user may send again.
    Error,
}

impl Submission {
    /// Status line shown under the panel's "Send" control.
    #[must_use]
    pub const fn status_text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Sending => "Sending...",
            Self::Sent => "Sent ✅",
            Self::Error => "Error ❌",
        }
    }
}

/// Status of the "post a job" form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    #[default]
    Idle,
    Posting,
    Posted,
    Failed,
}

impl PostStatus {
    #[must_use]
    pub const fn status_text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Posting => "Posting...",
            Self::Posted => "Job posted ✅",
            Self::Failed => "Error posting job ❌",
        }
    }
}

/// Named page sections the view can be directed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Jobs,
    Post,
}

impl Section {
    /// Anchor name of the section (`"jobs"`, `"post"`).
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Jobs => "jobs",
            Self::Post => "post",
        }
    }
}

/// Text inputs of the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterField {
    Query,
    City,
    Category,
}

/// Text inputs of a card's application panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicantField {
    Name,
    Contact,
    Message,
}
