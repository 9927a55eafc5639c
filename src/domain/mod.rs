//! Domain layer for the job board core.
//!
//! This module contains the core domain types, independent of the HTTP client
//! and of the view layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`job`]: Job listing, draft and application models
//!
//! # Examples
//!
//! ```
//! use jobboard::domain::{JobDraft, Result};
//!
//! fn build() -> Result<()> {
//!     let draft = JobDraft {
//!         title: "Move a couch".to_string(),
//!         pay_amount: "60".to_string(),
//!         ..Default::default()
//!     };
//!     let payload = draft.to_payload()?;
//!     assert_eq!(payload.title, "Move a couch");
//!     Ok(())
//! }
//! # build().unwrap();
//! ```

pub mod error;
pub mod job;

pub use error::{JobBoardError, Result};
pub use job::{ApplyPayload, DraftField, Job, JobDraft, JobId, NewJobPayload};
