//! Presentation boundary.
//!
//! Turns `UiState` snapshots into display-ready view models and renders them
//! as text:
//!
//! ```text
//! UiState → compute_viewmodel → ScreenViewModel → render → io::Write
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types and computation (including cover filtering)
//! - [`renderer`]: Plain-text renderer

pub mod renderer;
pub mod viewmodel;

pub use renderer::render;
pub use viewmodel::{compute_viewmodel, Body, BookCard, ScreenViewModel, SearchBarInfo};
