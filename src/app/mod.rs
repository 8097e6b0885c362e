//! Application layer coordinating phase, UI state, events, and actions.
//!
//! This module sits between the host (main.rs or any other front end) and the
//! data layer. It implements the search state machine and the event model the
//! presentation layer drives it with.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → Phase Updates / Actions → trigger_search
//!                                                                      ↓
//!                           Presentation ← UiState snapshots ←─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Owner of phase and state, runs searches
//! - [`handler`]: Event processing
//! - [`state`]: `UiState` and `SearchOutcome`

pub mod actions;
pub mod controller;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use controller::BookshelfController;
pub use handler::{handle_event, Event};
pub use state::{SearchOutcome, UiState};
