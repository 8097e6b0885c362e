//! View-state controller driving the search state machine.
//!
//! [`BookshelfController`] owns the current search phase and the current
//! [`UiState`]. Presentation reads both through `tokio::sync::watch` channels:
//! snapshots are cheap clones, subscribers get woken on every change, and the
//! controller stays the only writer.
//!
//! # Search Flow
//!
//! 1. Empty phase: publish `NoContent("")` and stop, no request is made
//! 2. Publish `Loading`
//! 3. `search_by_phase`, then fetch every id concurrently
//! 4. Join the details in search-result order
//! 5. Publish `Success`, `NoContent`, or `Error` (one failed fetch fails all)
//!
//! # Re-entrancy
//!
//! The latest trigger wins. Every call takes a new generation number and only
//! publishes while it is still the newest one; an older call that finishes
//! later returns [`SearchOutcome::Superseded`] and leaves the state alone.
//! Superseded requests are not aborted. Dropping the future returned by
//! [`BookshelfController::trigger_search`] cancels all of its requests.

use super::state::{SearchOutcome, UiState};
use crate::data::BookRepository;
use crate::domain::{Book, TransportError};
use futures_util::stream::{self, StreamExt, TryStreamExt};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Owner of the phase and UI state for one session.
///
/// The host creates one controller per session and shares it (usually in an
/// `Arc`) with whatever renders the state.
///
/// # Example
///
/// ```no_run
/// use bookshelf::app::{BookshelfController, UiState};
/// use bookshelf::data::NetworkBookRepository;
/// use bookshelf::network::BooksApiClient;
/// use bookshelf::Config;
///
/// # async fn run() -> bookshelf::Result<()> {
/// let client = BooksApiClient::from_config(&Config::default())?;
/// let controller = BookshelfController::new(NetworkBookRepository::new(client));
///
/// controller.update_phase("a wizard of earthsea");
/// controller.trigger_search().await;
///
/// if let UiState::Success { books } = controller.state() {
///     println!("{} books", books.len());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct BookshelfController<R> {
    repository: R,
    phase: watch::Sender<String>,
    state: watch::Sender<UiState>,
    generation: AtomicU64,
    max_concurrent_fetches: usize,
}

impl<R: BookRepository> BookshelfController<R> {
    /// Creates a controller in the `Start` state with an empty phase.
    #[must_use]
    pub fn new(repository: R) -> Self {
        Self::with_fetch_limit(repository, crate::DEFAULT_MAX_CONCURRENT_FETCHES)
    }

    /// Creates a controller that runs at most `limit` detail fetches at once.
    ///
    /// A limit of `0` is treated as `1`.
    #[must_use]
    pub fn with_fetch_limit(repository: R, limit: usize) -> Self {
        let (phase, _) = watch::channel(String::new());
        let (state, _) = watch::channel(UiState::Start);

        Self {
            repository,
            phase,
            state,
            generation: AtomicU64::new(0),
            max_concurrent_fetches: limit.max(1),
        }
    }

    /// Replaces the phase. No validation and no state transition.
    ///
    /// Phase subscribers are notified so the search bar can re-render.
    pub fn update_phase(&self, new_phase: impl Into<String>) {
        let new_phase = new_phase.into();
        tracing::trace!(phase = %new_phase, "phase updated");
        self.phase.send_replace(new_phase);
    }

    #[must_use]
    pub fn phase(&self) -> String {
        self.phase.borrow().clone()
    }

    /// Snapshot of the current UI state.
    #[must_use]
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every published state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    /// Receiver that observes phase edits.
    #[must_use]
    pub fn subscribe_phase(&self) -> watch::Receiver<String> {
        self.phase.subscribe()
    }

    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Runs one search for the current phase and publishes the resulting state.
    ///
    /// `Loading` is published before the first request is sent. The returned
    /// outcome carries the final state, or [`SearchOutcome::Superseded`] when
    /// a newer trigger started while this one was in flight.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(phase = tracing::field::Empty, generation = tracing::field::Empty)
    )]
    pub async fn trigger_search(&self) -> SearchOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let phase = self.phase();

        let span = tracing::Span::current();
        span.record("phase", phase.as_str());
        span.record("generation", generation);

        if phase.is_empty() {
            tracing::debug!("empty phase, skipping search");
            return self.publish(generation, UiState::NoContent { phase });
        }

        if let SearchOutcome::Superseded = self.publish(generation, UiState::Loading) {
            return SearchOutcome::Superseded;
        }

        let next = match self.load_books(&phase).await {
            Ok(books) if books.is_empty() => UiState::NoContent { phase },
            Ok(books) => UiState::Success { books },
            Err(e) => {
                tracing::warn!(error = %e, "search failed");
                UiState::Error {
                    reason: e.to_string(),
                }
            }
        };

        self.publish(generation, next)
    }

    /// Searches, then fetches every id with bounded concurrency.
    ///
    /// `buffered` yields in input order regardless of completion order, and
    /// `try_collect` stops at the first error, dropping the remaining fetches.
    async fn load_books(&self, phase: &str) -> Result<Vec<Book>, TransportError> {
        let result = self.repository.search_by_phase(phase).await?;

        tracing::debug!(
            result_count = result.len(),
            fetch_limit = self.max_concurrent_fetches,
            "fetching book details"
        );

        stream::iter(result.items)
            .map(|id| async move { self.repository.fetch_book(&id).await })
            .buffered(self.max_concurrent_fetches)
            .try_collect()
            .await
    }

    /// Publishes `next` if `generation` is still the newest trigger.
    ///
    /// The generation check runs under the channel's write lock, so a stale
    /// call can never overwrite a state published by a newer one.
    fn publish(&self, generation: u64, next: UiState) -> SearchOutcome {
        let mut published = None;

        self.state.send_if_modified(|current| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = next.clone();
            published = Some(next.name());
            true
        });

        match published {
            Some(name) => {
                tracing::debug!(state = name, generation, "ui state published");
                SearchOutcome::Published(next)
            }
            None => {
                tracing::debug!(generation, "search superseded by a newer trigger");
                SearchOutcome::Superseded
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, SearchResult};
    use async_trait::async_trait;

    struct StaticRepository;

    #[async_trait]
    impl BookRepository for StaticRepository {
        async fn search_by_phase(&self, phase: &str) -> Result<SearchResult, TransportError> {
            Ok(SearchResult {
                items: vec![BookId::new(format!("{phase}-1"))],
            })
        }

        async fn fetch_book(&self, id: &BookId) -> Result<Book, TransportError> {
            Ok(Book::new(id.as_str()))
        }
    }

    #[test]
    fn new_controller_starts_empty() {
        let controller = BookshelfController::new(StaticRepository);
        assert_eq!(controller.state(), UiState::Start);
        assert_eq!(controller.phase(), "");
    }

    #[test]
    fn zero_fetch_limit_is_clamped() {
        let controller = BookshelfController::with_fetch_limit(StaticRepository, 0);
        assert_eq!(controller.max_concurrent_fetches, 1);
    }

    #[test]
    fn update_phase_notifies_without_transition() {
        let controller = BookshelfController::new(StaticRepository);
        let mut phase_rx = controller.subscribe_phase();
        let state_rx = controller.subscribe();

        controller.update_phase("dune");

        assert!(phase_rx.has_changed().unwrap());
        assert_eq!(*phase_rx.borrow_and_update(), "dune");
        assert!(!state_rx.has_changed().unwrap());
        assert_eq!(controller.state(), UiState::Start);
    }

    #[tokio::test]
    async fn stale_generation_cannot_publish() {
        let controller = BookshelfController::new(StaticRepository);
        controller.generation.store(5, Ordering::SeqCst);

        assert_eq!(controller.publish(4, UiState::Loading), SearchOutcome::Superseded);
        assert_eq!(controller.state(), UiState::Start);

        assert_eq!(
            controller.publish(5, UiState::Loading),
            SearchOutcome::Published(UiState::Loading)
        );
        assert_eq!(controller.state(), UiState::Loading);
    }

    #[tokio::test]
    async fn single_result_search_succeeds() {
        let controller = BookshelfController::new(StaticRepository);
        controller.update_phase("dune");

        let outcome = controller.trigger_search().await;

        let expected = UiState::Success {
            books: vec![Book::new("dune-1")],
        };
        assert_eq!(outcome, SearchOutcome::Published(expected.clone()));
        assert_eq!(controller.state(), expected);
    }

    fn assert_send<T: Send>(_: &T) {}

    #[test]
    fn trigger_search_future_is_send() {
        let controller = BookshelfController::new(StaticRepository);
        let future = controller.trigger_search();
        assert_send(&future);
    }

    #[tokio::test]
    async fn search_runs_on_spawned_task() {
        let controller = std::sync::Arc::new(BookshelfController::new(StaticRepository));
        controller.update_phase("earthsea");

        let task = tokio::spawn({
            let controller = std::sync::Arc::clone(&controller);
            async move { controller.trigger_search().await }
        });

        assert_eq!(
            task.await.unwrap(),
            SearchOutcome::Published(UiState::Success {
                books: vec![Book::new("earthsea-1")],
            })
        );
    }
}
