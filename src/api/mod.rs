//! API layer: the job board HTTP client and the request/response protocol.
//!
//! # Architecture
//!
//! - `messages`: [`ApiRequest`] / [`ApiResponse`] exchanged with the controller
//! - `client`: the [`JobBoardApi`] seam and its `reqwest` implementation
//! - `handler`: [`ApiWorker`], which executes requests and folds errors into responses

pub mod client;
pub mod handler;
pub mod messages;

pub use client::{HttpJobBoardClient, JobBoardApi};
pub use handler::ApiWorker;
pub use messages::{ApiRequest, ApiResponse, SearchFilters, ALL_CATEGORIES};
