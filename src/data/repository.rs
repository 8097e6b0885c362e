//! Book repository abstraction.
//!
//! The [`BookRepository`] trait is the seam between the controller and the
//! network. The controller only ever talks to this trait, which keeps it
//! testable with in-memory fakes.
//!
//! The trait is minimal: one method per use case, no caching, no retries. Each
//! call maps to exactly one catalog request.

use crate::domain::{Book, BookId, SearchResult, TransportError};
use crate::network::BooksApiClient;
use async_trait::async_trait;

/// Source of search results and book details.
///
/// Implementations must be shareable across tasks; the controller issues
/// several `fetch_book` calls concurrently on the same instance.
///
/// # Implementations
///
/// - [`NetworkBookRepository`]: Google Books over HTTP (default)
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Runs a catalog search for `phase` and returns the matching ids in
    /// response order.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] on network failure, a non-success status,
    /// or an unparseable body.
    async fn search_by_phase(&self, phase: &str) -> Result<SearchResult, TransportError>;

    /// Fetches the detail record for one id.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BookRepository::search_by_phase`].
    async fn fetch_book(&self, id: &BookId) -> Result<Book, TransportError>;
}

/// [`BookRepository`] backed by the Google Books HTTP API.
///
/// # Examples
///
/// ```no_run
/// use bookshelf::data::{BookRepository, NetworkBookRepository};
/// use bookshelf::network::BooksApiClient;
/// use bookshelf::Config;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let repository = NetworkBookRepository::new(BooksApiClient::from_config(&Config::default())?);
/// let result = repository.search_by_phase("earthsea").await?;
/// for id in &result.items {
///     let book = repository.fetch_book(id).await?;
///     println!("{:?}", book.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct NetworkBookRepository {
    client: BooksApiClient,
}

impl NetworkBookRepository {
    #[must_use]
    pub const fn new(client: BooksApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BookRepository for NetworkBookRepository {
    async fn search_by_phase(&self, phase: &str) -> Result<SearchResult, TransportError> {
        let list = self.client.search_volumes(phase).await?;
        let result = SearchResult::from(list);
        tracing::debug!(phase = %phase, result_count = result.len(), "search completed");
        Ok(result)
    }

    async fn fetch_book(&self, id: &BookId) -> Result<Book, TransportError> {
        let volume = self.client.get_volume(id.as_str()).await?;
        tracing::trace!(book_id = %id, "book details fetched");
        Ok(Book::from(volume))
    }
}

#[async_trait]
impl<R: BookRepository + ?Sized> BookRepository for std::sync::Arc<R> {
    async fn search_by_phase(&self, phase: &str) -> Result<SearchResult, TransportError> {
        (**self).search_by_phase(phase).await
    }

    async fn fetch_book(&self, id: &BookId) -> Result<Book, TransportError> {
        (**self).fetch_book(id).await
    }
}
