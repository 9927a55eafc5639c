//! Jobboard: the client-side core of a job board widget.
//!
//! Jobboard keeps a dynamically rendered list of job cards consistent with
//! asynchronous search results and tracks, per card, an expandable application
//! panel with its own submission status. It provides:
//! - Search, refresh and post-a-job flows over a small JSON HTTP API
//! - Strict 1:1 reconciliation between listed jobs and per-card state
//! - A pure render projector producing escaped HTML render instructions
//! - Persistent event delegation keyed by job id

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal view shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, card store, list sync            │
//! │  - Controller driver                                │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐           ┌───────────────────────┐
//! │ UI Layer (ui/)        │           │ API Layer (api/)      │
//! │ - Render projector    │           │ - JobBoardApi seam    │
//! │ - HTML components     │           │ - reqwest client      │
//! │ - Event delegation    │           │ - Request worker      │
//! └───────────────────────┘           └───────────────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Job, draft and application models                │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Interaction controller with event/action model
//! - [`api`]: Job board API client and request protocol
//! - [`domain`]: Core domain types (Job, drafts, errors)
//! - [`ui`]: Render projection, HTML painting and delegation
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! # jobboard.toml
//! api_base = "https://jobs.example.com/api"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use jobboard::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (render, actions) = handle_event(&mut state, &Event::Refresh)?;
//! assert!(render);
//! assert!(matches!(actions.as_slice(), [Action::Api(_)]));
//! # Ok::<(), jobboard::JobBoardError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Controller, Event, Outcome};
pub use domain::{Job, JobBoardError, JobId, Result};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// API root used when nothing is configured.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Widget configuration.
///
/// # Example
///
/// ```toml
/// api_base = "http://127.0.0.1:8000/api"
/// trace_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root of the job board API; `jobs` and `jobs/{id}/apply` are resolved
    /// below it. Default: [`DEFAULT_API_BASE`]
    pub api_base: String,

    /// Log level filter. Options: `trace`, `debug`, `info`, `warn`, `error`,
    /// or any `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            trace_level: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    api_base: Option<String>,
    trace_level: Option<String>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let api_base = file
            .api_base
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_base,
            trace_level: file.trace_level,
        }
    }
}

impl Config {
    /// Parses configuration from a string map, such as host-provided settings.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base`: trimmed; blank falls back to [`DEFAULT_API_BASE`]
    /// - `trace_level`: taken verbatim
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jobboard::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_base".to_string(), " https://jobs.example.com/api ".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_base, "https://jobs.example.com/api");
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        ConfigFile {
            api_base: config.get("api_base").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
        .into()
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Config`] on malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| JobBoardError::Config(e.to_string()))?;
        Ok(file.into())
    }

    /// Loads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`JobBoardError::Io`] if the file cannot be read and
    /// [`JobBoardError::Config`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&content)
    }
}

/// Creates the initial application state.
///
/// The state starts with an empty list and no filters; the caller dispatches
/// [`Event::Initialize`] to perform the initial load.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(api_base = %config.api_base, "initializing job board widget");
    AppState::new()
}
