//! Bookshelf: search the Google Books catalog and show the covers.
//!
//! Bookshelf provides:
//! - A repository over the two catalog requests it needs (search, details)
//! - A view-state controller running the search state machine
//! - Concurrent, order-preserving detail fetches with all-or-nothing errors
//! - A presentation boundary computing view models from state snapshots

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (main.rs)                                     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Search controller                                │
//! │  - UiState                                          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Data Layer    │   │ Network Layer │
//! │ (ui/)         │   │ (data/)       │   │ (network/)    │
//! │ - View models │   │ - Repository  │   │ - HTTP client │
//! │ - Rendering   │   │   trait       │   │ - Wire models │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Config paths (infrastructure/)                   │
//! │  - Error types (domain/error)                       │
//! │  - Book model (domain/book)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber                               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Search state machine, controller and event model
//! - [`data`]: Repository trait and its HTTP implementation
//! - [`domain`]: Core domain types (Book, errors)
//! - [`infrastructure`]: Platform paths
//! - [`network`]: Google Books client and wire records
//! - [`observability`]: Logging setup
//! - [`ui`]: View models and text rendering
//!
//! # Configuration
//!
//! Read from `~/.config/bookshelf/config.toml` when present:
//!
//! ```toml
//! base_url = "https://www.googleapis.com/books/v1/"
//! request_timeout_secs = 30
//! max_concurrent_fetches = 10
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use bookshelf::{initialize, Config, UiState};
//!
//! # async fn run() -> bookshelf::Result<()> {
//! let controller = initialize(&Config::default())?;
//! controller.update_phase("the left hand of darkness");
//! controller.trigger_search().await;
//!
//! match controller.state() {
//!     UiState::Success { books } => println!("{} books", books.len()),
//!     other => println!("{}", other.name()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod network;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, BookshelfController, Event, SearchOutcome, UiState};
pub use data::{BookRepository, NetworkBookRepository};
pub use domain::{Book, BookId, BookshelfError, Result, SearchResult, TransportError};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Google Books API root.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/books/v1/";

/// Per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Detail fetches in flight per search. Matches the catalog's default page size.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 10;

/// Runtime configuration.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog API root. Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Per-request timeout. Default: 30
    pub request_timeout_secs: u64,

    /// Upper bound on concurrent detail fetches per search. Default: 10
    pub max_concurrent_fetches: usize,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            trace_level: None,
        }
    }
}

impl Config {
    /// Applies `key=value` overrides on top of this config.
    ///
    /// # Parsing Rules
    ///
    /// - `base_url`: trimmed; empty values keep the current URL
    /// - `request_timeout_secs`: `u64`, keeps the current value on parse error
    /// - `max_concurrent_fetches`: `usize`, keeps the current value on parse
    ///   error or `0`
    /// - `trace_level`: copied as is
    /// - unknown keys are logged and ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookshelf::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("request_timeout_secs".to_string(), "5".to_string());
    /// map.insert("max_concurrent_fetches".to_string(), "lots".to_string());
    ///
    /// let config = Config::default().with_overrides(&map);
    /// assert_eq!(config.request_timeout_secs, 5);
    /// assert_eq!(config.max_concurrent_fetches, 10);
    /// ```
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (key, value) in overrides {
            let value = value.trim();
            match key.as_str() {
                "base_url" if !value.is_empty() => self.base_url = value.to_string(),
                "request_timeout_secs" => {
                    if let Ok(secs) = value.parse::<u64>() {
                        self.request_timeout_secs = secs;
                    }
                }
                "max_concurrent_fetches" => {
                    if let Some(limit) = value.parse::<usize>().ok().filter(|n| *n > 0) {
                        self.max_concurrent_fetches = limit;
                    }
                }
                "trace_level" => self.trace_level = Some(value.to_string()),
                "base_url" => {}
                other => tracing::warn!(key = other, "ignoring unknown config override"),
            }
        }

        self
    }

    /// Parses a TOML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Config`] if the document is not valid TOML
    /// or a value has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| BookshelfError::Config(format!("invalid config: {e}")))
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Io`] if the file cannot be read, or
    /// [`BookshelfError::Config`] if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading config file");
        Self::from_toml_str(&text)
    }

    /// Loads configuration for a session.
    ///
    /// An explicit `path` must exist. Without one, the default config file is
    /// used if present, otherwise [`Config::default`].
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_file`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match infrastructure::default_config_path() {
            Some(default_path) if default_path.is_file() => Self::from_file(default_path),
            _ => Ok(Self::default()),
        }
    }
}

/// Builds a controller wired to the Google Books API.
///
/// # Errors
///
/// Returns [`BookshelfError::Config`] if the configured base URL is invalid or
/// the HTTP client cannot be built.
///
/// # Example
///
/// ```rust
/// use bookshelf::{initialize, Config, UiState};
///
/// let controller = initialize(&Config::default())?;
/// assert_eq!(controller.state(), UiState::Start);
/// # Ok::<(), bookshelf::BookshelfError>(())
/// ```
pub fn initialize(config: &Config) -> Result<BookshelfController<NetworkBookRepository>> {
    tracing::debug!(base_url = %config.base_url, "initializing bookshelf session");

    let client = network::BooksApiClient::from_config(config)?;
    let repository = NetworkBookRepository::new(client);

    Ok(BookshelfController::with_fetch_limit(
        repository,
        config.max_concurrent_fetches,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_points_at_google_books() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://www.googleapis.com/books/v1/");
        assert_eq!(config.max_concurrent_fetches, 10);
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn overrides_keep_current_value_on_bad_input() {
        let base = Config {
            base_url: "http://127.0.0.1:9000/".to_string(),
            request_timeout_secs: 7,
            max_concurrent_fetches: 4,
            trace_level: None,
        };
        let mut map = BTreeMap::new();
        map.insert("base_url".to_string(), "  ".to_string());
        map.insert("request_timeout_secs".to_string(), "-3".to_string());
        map.insert("max_concurrent_fetches".to_string(), "0".to_string());
        map.insert("trace_level".to_string(), "debug".to_string());
        map.insert("colour".to_string(), "blue".to_string());

        let config = base.clone().with_overrides(&map);

        assert_eq!(config.base_url, base.base_url);
        assert_eq!(config.request_timeout_secs, 7);
        assert_eq!(config.max_concurrent_fetches, 4);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn overrides_replace_file_values() {
        let file = Config::from_toml_str("max_concurrent_fetches = 3\nrequest_timeout_secs = 9\n").unwrap();
        let mut map = BTreeMap::new();
        map.insert("max_concurrent_fetches".to_string(), "20".to_string());
        map.insert("base_url".to_string(), " http://localhost:8080/ ".to_string());

        let config = file.with_overrides(&map);

        assert_eq!(config.max_concurrent_fetches, 20);
        assert_eq!(config.request_timeout_secs, 9);
        assert_eq!(config.base_url, "http://localhost:8080/");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("max_concurrent_fetches = 3\n").unwrap();
        assert_eq!(config.max_concurrent_fetches, 3);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(
            Config::from_toml_str("request_timeout_secs = \"soon\""),
            Err(BookshelfError::Config(_))
        ));
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://127.0.0.1:9000/\"").unwrap();
        writeln!(file, "trace_level = \"warn\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000/");
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(BookshelfError::Io(_))));
    }

    #[test]
    fn initialize_rejects_bad_base_url() {
        let config = Config {
            base_url: "ftp://example.com/".to_string(),
            ..Config::default()
        };
        assert!(matches!(initialize(&config), Err(BookshelfError::Config(_))));
    }
}
