//! Domain layer for Bookshelf.
//!
//! Core types shared by every other layer, free of HTTP or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book, identifier and search result models
//!
//! # Examples
//!
//! ```
//! use bookshelf::domain::{Book, BookId, SearchResult};
//!
//! let result = SearchResult { items: vec![BookId::new("a"), BookId::new("b")] };
//! assert_eq!(result.len(), 2);
//! let book = Book::new("a");
//! assert_eq!(book.id, "a");
//! ```

pub mod book;
pub mod error;

pub use book::{Book, BookId, SearchResult};
pub use error::{BookshelfError, Result, TransportError};
