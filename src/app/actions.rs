//! Actions representing side effects to be executed by the host.
//!
//! [`handle_event`](super::handle_event) stays synchronous: anything that has
//! to await (a search) or leave the session (quitting) is returned as an
//! [`Action`] and carried out by the host, which decides where the search task
//! runs.
//!
//! # Example
//!
//! ```rust
//! use bookshelf::app::Action;
//!
//! let actions = vec![Action::TriggerSearch];
//! assert!(actions.contains(&Action::TriggerSearch));
//! ```

/// Commands the host executes after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run [`trigger_search`](super::BookshelfController::trigger_search)
    /// for the current phase.
    TriggerSearch,

    /// End the session and drop the controller.
    Close,
}
