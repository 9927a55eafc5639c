//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the view layer and the domain/api layers and
//! implements the interaction controller of the widget.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! View Events → Event Handler → State Mutations → Actions → API Worker
//!                    ↑                                          ↓
//!                    └──────────────── API Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`cards`]: Per-job application panel state store
//! - [`controller`]: Async driver executing actions
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Status and field enums
//! - [`state`]: Central application state container
//! - [`sync`]: Authoritative job list and card reconciliation
//!
//! # Example
//!
//! ```rust
//! use jobboard::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new();
//! let (_render, actions) = handle_event(&mut state, &Event::Initialize)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod cards;
pub mod controller;
pub mod handler;
pub mod modes;
pub mod state;
pub mod sync;

pub use actions::Action;
pub use cards::{CardState, CardStore};
pub use controller::{Controller, Outcome};
pub use handler::{handle_event, Event};
pub use modes::{ApplicantField, FilterField, PostStatus, Section, Submission};
pub use state::AppState;
pub use sync::JobList;
