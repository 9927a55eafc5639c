//! Error types for the job board core.
//!
//! This module defines the centralized error type [`JobBoardError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate.

use crate::domain::JobId;
use thiserror::Error;

/// The main error type for job board operations.
///
/// Network outcomes collapse into a single [`JobBoardError::Transport`] variant:
/// the surrounding widget never needs finer-grained status codes, so server
/// error bodies are not parsed.
///
/// # Examples
///
/// ```
/// use jobboard::domain::JobBoardError;
///
/// fn reject() -> Result<(), JobBoardError> {
///     Err(JobBoardError::Transport("status 500".to_string()))
/// }
/// assert!(reject().is_err());
/// ```
#[derive(Debug, Error)]
pub enum JobBoardError {
    /// Any non-success outcome of an API call.
    ///
    /// Covers connection failures, undecodable bodies and non-2xx statuses alike.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// A job draft field could not be coerced at the boundary.
    ///
    /// Raised before any request is issued, so the draft stays in the form.
    #[error("Invalid draft field `{field}`: {reason}")]
    InvalidDraft {
        /// Name of the offending draft field.
        field: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    /// A card operation targeted an id that is not in the authoritative list.
    #[error("Unknown card: {0}")]
    UnknownCard(JobId),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for JobBoardError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// A specialized `Result` type for job board operations.
pub type Result<T> = std::result::Result<T, JobBoardError>;
