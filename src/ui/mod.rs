//! User interface layer: projection, HTML painting and event delegation.
//!
//! # Architecture
//!
//! ```text
//! AppState → project → PageView → components → HTML
//!     ↑                                          │
//!     └────── Event ← delegate ← view callbacks ─┘
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable state
//! - [`renderer`]: The render projector and the top-level `render`
//! - [`components`]: HTML component renderers
//! - [`delegate`]: Maps view callbacks to controller events
//! - [`helpers`]: HTML escaping

pub mod components;
pub mod delegate;
pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{project, render};
pub use viewmodel::{
    Binding, CardView, Control, EmptyState, PageView, PanelView, PostFormView, RenderPlan,
    SearchBarView,
};
