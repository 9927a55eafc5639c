//! Structured logging for the widget and its binary.
//!
//! Every layer logs through `tracing` macros with structured fields; this
//! module installs the subscriber that turns them into text on stderr.
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
