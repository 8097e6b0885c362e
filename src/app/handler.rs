//! Event handling for presentation input.
//!
//! This module translates what the user does in the search screen into
//! controller mutations and host [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! User Input → Event → handle_event → phase update / Actions → Host → trigger_search
//!                                                                        ↓
//!                        Presentation ← watch::Receiver<UiState> ←───────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::{handle_event, Action, BookshelfController, Event};
//! # use bookshelf::data::BookRepository;
//! # use bookshelf::domain::{Book, BookId, SearchResult, TransportError};
//! # struct Empty;
//! # #[async_trait::async_trait]
//! # impl BookRepository for Empty {
//! #     async fn search_by_phase(&self, _: &str) -> Result<SearchResult, TransportError> { Ok(SearchResult::default()) }
//! #     async fn fetch_book(&self, id: &BookId) -> Result<Book, TransportError> { Ok(Book::new(id.as_str())) }
//! # }
//!
//! let controller = BookshelfController::new(Empty);
//! handle_event(&controller, &Event::PhaseChanged("dune".to_string()))?;
//! let (_, actions) = handle_event(&controller, &Event::SubmitSearch)?;
//! assert_eq!(actions, vec![Action::TriggerSearch]);
//! # Ok::<(), bookshelf::BookshelfError>(())
//! ```

use super::{Action, BookshelfController};
use crate::data::BookRepository;

/// Input coming from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search field text changed.
    PhaseChanged(String),

    /// The clear button was pressed.
    ClearPhase,

    /// The search key or search button was pressed.
    ///
    /// Ignored while the phase is blank.
    SubmitSearch,

    /// The reload button on the error screen was pressed.
    Reload,

    /// The user asked to leave.
    Quit,
}

/// Applies an event to the controller.
///
/// Returns whether the host should re-render, plus the actions to execute.
/// Searches are never run here; they are returned as
/// [`Action::TriggerSearch`].
///
/// # Errors
///
/// Never fails for the current event set.
pub fn handle_event<R: BookRepository>(
    controller: &BookshelfController<R>,
    event: &Event,
) -> crate::Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PhaseChanged(phase) => {
            controller.update_phase(phase.clone());
            Ok((true, vec![]))
        }
        Event::ClearPhase => {
            controller.update_phase(String::new());
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if controller.phase().trim().is_empty() {
                tracing::debug!("blank phase submitted, ignoring");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::TriggerSearch]))
        }
        Event::Reload => {
            tracing::debug!(state = controller.state().name(), "reload requested");
            Ok((false, vec![Action::TriggerSearch]))
        }
        Event::Quit => Ok((false, vec![Action::Close])),
    }
}
