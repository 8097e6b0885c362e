//! Book domain model.
//!
//! These are the types the controller and the presentation layer work with.
//! They are deliberately independent from the upstream JSON layout, which lives
//! in [`crate::network::models`] and converts into these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque catalog identifier returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

impl BookId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Ordered list of identifiers produced by one search.
///
/// The order is the order the API returned them in and is kept all the way
/// into [`UiState::Success`](crate::app::UiState::Success).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<BookId>,
}

impl SearchResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Full detail record for one catalog entry.
///
/// Everything except `id` is optional: the catalog routinely omits authors or
/// cover art, and that is not an error.
///
/// # Examples
///
/// ```
/// use bookshelf::domain::Book;
///
/// let book = Book::new("zyTCAlFPjgYC");
/// assert!(book.title.is_none());
/// assert!(!book.has_thumbnail());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
}

impl Book {
    /// Creates a book with only an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            authors: None,
            thumbnail_url: None,
        }
    }

    /// Returns `true` when the book has a non-blank cover URL.
    #[must_use]
    pub fn has_thumbnail(&self) -> bool {
        self.thumbnail_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Authors joined with `", "`, or `None` when the list is missing or empty.
    #[must_use]
    pub fn authors_line(&self) -> Option<String> {
        self.authors
            .as_ref()
            .filter(|authors| !authors.is_empty())
            .map(|authors| authors.join(", "))
    }
}
