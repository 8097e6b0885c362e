//! Error types for the Bookshelf crate.
//!
//! This module defines two `thiserror` enums:
//!
//! - [`TransportError`]: the only failure the search state machine knows about.
//!   Network I/O failures, non-success HTTP statuses, and unparseable bodies
//!   are kept apart for logging, but every variant ends up as
//!   [`UiState::Error`](crate::app::UiState::Error).
//! - [`BookshelfError`]: crate-level failures (configuration, I/O) that occur
//!   while setting up a session, plus transport errors surfaced by the host.

use thiserror::Error;

/// A failed exchange with the upstream catalog API.
///
/// # Examples
///
/// ```
/// use bookshelf::domain::TransportError;
///
/// let err = TransportError::Status {
///     status: 503,
///     url: "https://www.googleapis.com/books/v1/volumes/abc".to_string(),
/// };
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connect, timeout, I/O).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Unexpected status {status} from {url}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
        /// Request URL, for diagnostics.
        url: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The main error type for Bookshelf operations outside the search state machine.
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// A catalog request failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Configuration is invalid or could not be parsed.
    ///
    /// Raised for malformed base URLs, unreadable TOML, or an HTTP client that
    /// cannot be built from the configured options.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Bookshelf operations.
pub type Result<T> = std::result::Result<T, BookshelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_convert_into_crate_error() {
        let err: BookshelfError = TransportError::Status {
            status: 404,
            url: "http://localhost/volumes/x".to_string(),
        }
        .into();

        assert!(matches!(err, BookshelfError::Transport(TransportError::Status { status: 404, .. })));
        assert_eq!(
            err.to_string(),
            "Transport error: Unexpected status 404 from http://localhost/volumes/x"
        );
    }

    #[test]
    fn decode_errors_keep_serde_message() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = TransportError::from(serde_err);
        assert!(err.to_string().starts_with("Malformed response body:"));
    }
}
