//! HTTP client for the Google Books volumes API.
//!
//! [`BooksApiClient`] issues the two GET requests the application needs and
//! decodes their bodies into [`models`](super::models) records. It performs no
//! caching and no retries: every call is one request.

use super::models::{Volume, VolumeList};
use crate::domain::error::{BookshelfError, Result, TransportError};
use crate::Config;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Thin wrapper around a `reqwest::Client` bound to one catalog base URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
///
/// # Examples
///
/// ```no_run
/// use bookshelf::network::BooksApiClient;
/// use bookshelf::Config;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BooksApiClient::from_config(&Config::default())?;
/// let list = client.search_volumes("dune").await?;
/// println!("{} hits", list.items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BooksApiClient {
    http: Client,
    base_url: Url,
}

impl BooksApiClient {
    /// Creates a client for `base_url` with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`BookshelfError::Config`] if the base URL is not an absolute
    /// `http`/`https` URL or the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BookshelfError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, timeout_secs = timeout.as_secs(), "books api client created");

        Ok(Self { http, base_url })
    }

    /// Creates a client from the crate [`Config`].
    ///
    /// # Errors
    ///
    /// Same as [`BooksApiClient::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.request_timeout_secs))
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base}/volumes?q={phase}`.
    ///
    /// # Errors
    ///
    /// Any [`TransportError`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn search_volumes(&self, phase: &str) -> std::result::Result<VolumeList, TransportError> {
        let mut url = self.endpoint(&["volumes"]);
        url.query_pairs_mut().append_pair("q", phase);
        self.get_json(url).await
    }

    /// `GET {base}/volumes/{id}`.
    ///
    /// # Errors
    ///
    /// Any [`TransportError`].
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_volume(&self, id: &str) -> std::result::Result<Volume, TransportError> {
        let url = self.endpoint(&["volumes", id]);
        self.get_json(url).await
    }

    /// Builds `{base}/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> std::result::Result<T, TransportError> {
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "catalog request rejected");
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::trace!(url = %url, body_len = body.len(), "catalog response received");

        Ok(serde_json::from_str(&body)?)
    }
}

/// Parses and validates the configured base URL.
///
/// Surrounding whitespace is trimmed. A trailing slash is optional; endpoint
/// paths are appended as segments either way.
fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| BookshelfError::Config(format!("invalid base URL '{trimmed}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(BookshelfError::Config(format!(
            "base URL must be an absolute http(s) URL, got '{trimmed}'"
        )));
    }

    Ok(url)
}
