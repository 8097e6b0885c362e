//! View model types representing renderable UI state.
//!
//! View models are computed from a [`UiState`] snapshot and consumed by the
//! renderer. They contain no business logic, only display-ready data.
//!
//! Cover filtering happens here and nowhere else: books without a thumbnail
//! are valid search results (the controller still reports `Success`), they
//! just have nothing to show in the cover grid.

use crate::app::UiState;
use crate::domain::Book;

/// Greeting shown before the first search.
pub const START_MESSAGE: &str = "Type a phrase and press Enter to search for books.";

/// Error screen text.
pub const ERROR_MESSAGE: &str = "Couldn't load data. Try clicking reload";

/// Complete screen view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenViewModel {
    /// Search bar contents.
    pub search_bar: SearchBarInfo,

    /// Main area below the search bar.
    pub body: Body,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current phase text.
    pub query: String,

    /// Clear and search buttons are only offered for non-blank phases.
    pub show_buttons: bool,
}

/// What fills the screen below the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Start {
        message: String,
    },
    Loading,
    Grid {
        cards: Vec<BookCard>,
    },
    NoContent {
        message: String,
    },
    Error {
        message: String,
        /// Label of the control that re-runs the search.
        retry_label: String,
    },
}

/// One cover in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    /// Catalog id, used as the grid key.
    pub id: String,
    pub title: String,
    pub authors: Option<String>,
    pub thumbnail_url: String,
}

impl BookCard {
    /// Builds a card, or `None` for books without a usable cover.
    #[must_use]
    pub fn from_book(book: &Book) -> Option<Self> {
        if !book.has_thumbnail() {
            return None;
        }

        let thumbnail_url = book.thumbnail_url.as_deref()?.trim().to_string();

        Some(Self {
            id: book.id.clone(),
            title: book.title.clone().unwrap_or_else(|| "Untitled".to_string()),
            authors: book.authors_line(),
            thumbnail_url,
        })
    }
}

/// Computes the screen for `state` with `phase` in the search bar.
///
/// # Example
///
/// ```rust
/// use bookshelf::app::UiState;
/// use bookshelf::ui::viewmodel::{compute_viewmodel, Body};
///
/// let vm = compute_viewmodel(&UiState::NoContent { phase: "zzz".into() }, "zzz");
/// assert!(matches!(vm.body, Body::NoContent { ref message } if message.contains("zzz")));
/// ```
#[must_use]
pub fn compute_viewmodel(state: &UiState, phase: &str) -> ScreenViewModel {
    let body = match state {
        UiState::Start => Body::Start {
            message: START_MESSAGE.to_string(),
        },
        UiState::Loading => Body::Loading,
        UiState::Success { books } => Body::Grid {
            cards: books.iter().filter_map(BookCard::from_book).collect(),
        },
        UiState::NoContent { phase } => Body::NoContent {
            message: no_content_message(phase),
        },
        UiState::Error { .. } => Body::Error {
            message: ERROR_MESSAGE.to_string(),
            retry_label: "reload".to_string(),
        },
    };

    ScreenViewModel {
        search_bar: SearchBarInfo {
            query: phase.to_string(),
            show_buttons: !phase.trim().is_empty(),
        },
        body,
    }
}

fn no_content_message(phase: &str) -> String {
    if phase.is_empty() {
        "Nothing to search for. Type a phrase first.".to_string()
    } else {
        format!("No books found for \"{phase}\".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, thumbnail: Option<&str>) -> Book {
        Book {
            id: id.to_string(),
            title: Some(format!("Title {id}")),
            authors: None,
            thumbnail_url: thumbnail.map(str::to_string),
        }
    }

    #[test]
    fn grid_skips_books_without_cover_and_keeps_order() {
        let state = UiState::Success {
            books: vec![
                book("c", Some("http://covers/c.jpg")),
                book("a", None),
                book("b", Some(" ")),
                book("d", Some("http://covers/d.jpg")),
            ],
        };

        let vm = compute_viewmodel(&state, "query");

        let Body::Grid { cards } = &vm.body else {
            panic!("expected grid, got {:?}", vm.body);
        };
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "d"]);
    }

    #[test]
    fn all_filtered_success_is_an_empty_grid() {
        let state = UiState::Success {
            books: vec![book("a", None)],
        };

        assert_eq!(
            compute_viewmodel(&state, "x").body,
            Body::Grid { cards: vec![] }
        );
    }

    #[test]
    fn untitled_books_get_placeholder_title() {
        let mut b = book("a", Some("http://covers/a.jpg"));
        b.title = None;
        b.authors = Some(vec!["A. Author".to_string()]);

        let card = BookCard::from_book(&b).unwrap();
        assert_eq!(card.title, "Untitled");
        assert_eq!(card.authors.as_deref(), Some("A. Author"));
    }

    #[test]
    fn no_content_names_the_phase() {
        let vm = compute_viewmodel(&UiState::NoContent { phase: "qwzx".into() }, "qwzx");
        assert_eq!(
            vm.body,
            Body::NoContent {
                message: "No books found for \"qwzx\".".to_string()
            }
        );
    }

    #[test]
    fn error_offers_reload() {
        let vm = compute_viewmodel(&UiState::Error { reason: "timeout".into() }, "dune");
        assert!(matches!(vm.body, Body::Error { ref retry_label, .. } if retry_label == "reload"));
    }

    #[test]
    fn search_buttons_hidden_for_blank_phase() {
        assert!(!compute_viewmodel(&UiState::Start, "  ").search_bar.show_buttons);
        assert!(compute_viewmodel(&UiState::Start, "dune").search_bar.show_buttons);
    }
}
