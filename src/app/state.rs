//! UI state machine types.
//!
//! [`UiState`] is the single source of truth the presentation layer reads to
//! decide what to draw. It is a closed set of variants; exactly one holds at a
//! time and only [`BookshelfController`](super::BookshelfController) changes it.
//!
//! # State Machine
//!
//! ```text
//! Start ──────► Loading   (trigger with non-empty phase)
//! Start ──────► NoContent (trigger with empty phase)
//! Loading ────► Success   (search and every detail fetch succeeded)
//! Loading ────► NoContent (search returned no ids)
//! Loading ────► Error     (any transport failure)
//! Error, NoContent, Success ──► Loading (next trigger)
//! ```

use crate::domain::Book;

/// What the presentation layer should currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    /// Nothing searched yet.
    #[default]
    Start,

    /// A search is in flight.
    Loading,

    /// Search finished with at least one book, in search-result order.
    Success {
        books: Vec<Book>,
    },

    /// Search finished with no books, or the phase was empty.
    NoContent {
        /// The phase that produced no results.
        phase: String,
    },

    /// A catalog request failed; partial results were discarded.
    Error {
        /// Display form of the transport error, for diagnostics only.
        reason: String,
    },
}

impl UiState {
    /// Short variant name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Loading => "loading",
            Self::Success { .. } => "success",
            Self::NoContent { .. } => "no_content",
            Self::Error { .. } => "error",
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Result of one [`trigger_search`](super::BookshelfController::trigger_search) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The call's final state was published and is (or was) visible.
    Published(UiState),

    /// A newer trigger started before this one finished; its result was dropped.
    Superseded,
}

impl SearchOutcome {
    /// The published state, if any.
    #[must_use]
    pub const fn state(&self) -> Option<&UiState> {
        match self {
            Self::Published(state) => Some(state),
            Self::Superseded => None,
        }
    }
}
