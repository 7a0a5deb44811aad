//! Async search session for Tagmarks.
//!
//! Drives the [`SearchSequencer`] against a [`BookmarkBackend`]: sequence
//! numbers are assigned under lock, the network call runs without holding
//! it, and arrival-time application decides whether the response is still
//! current. In-flight requests are never cancelled; correctness comes
//! entirely from discard-on-arrival.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::client::bookmark_api::BookmarkBackend;
use crate::search::sequencer::{Dispatch, SearchSequencer, SearchState};
use crate::types::errors::ApiError;

/// Debounce interval applied by [`SearchSession::search_debounced`].
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(350);

/// A live incremental-search session.
///
/// Cheap to share: all methods take `&self`, so concurrent in-flight
/// searches (the whole point of the sequencer) work through one instance.
pub struct SearchSession {
    backend: Arc<dyn BookmarkBackend>,
    sequencer: Mutex<SearchSequencer>,
    keystroke: AtomicU64,
    debounce: Duration,
}

impl SearchSession {
    pub fn new(backend: Arc<dyn BookmarkBackend>) -> Self {
        Self::with_debounce(backend, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(backend: Arc<dyn BookmarkBackend>, debounce: Duration) -> Self {
        Self {
            backend,
            sequencer: Mutex::new(SearchSequencer::new()),
            keystroke: AtomicU64::new(0),
            debounce,
        }
    }

    /// Runs one search round trip.
    ///
    /// A blank query clears results locally and returns without issuing a
    /// request. Otherwise the query is dispatched with the next sequence
    /// number; when the response arrives it is applied or discarded per the
    /// sequencer's staleness rule. Returns a snapshot of the visible state
    /// as of arrival, which may reflect a newer request than this one.
    pub async fn search(&self, query: &str) -> Result<SearchState, ApiError> {
        let request_id = {
            let mut seq = self.lock();
            match seq.dispatch(query) {
                Dispatch::Cleared => return Ok(seq.state().clone()),
                Dispatch::Issued(id) => id,
            }
        };

        log::debug!("search dispatch {}: {:?}", request_id, query);

        match self.backend.search(query, request_id).await {
            Ok(response) => {
                let mut seq = self.lock();
                seq.apply(response);
                Ok(seq.state().clone())
            }
            Err(err) => {
                log::warn!("search request {} failed: {}", request_id, err);
                let mut seq = self.lock();
                seq.apply_failure(request_id);
                Err(err)
            }
        }
    }

    /// Debounced variant of [`search`](Self::search) for per-keystroke use.
    ///
    /// Waits out the debounce interval first; if another call supersedes
    /// this one in the meantime, resolves to `None` without dispatching
    /// (no sequence number is consumed for superseded keystrokes).
    pub async fn search_debounced(&self, query: &str) -> Option<Result<SearchState, ApiError>> {
        let stroke = self.keystroke.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.debounce).await;
        if self.keystroke.load(Ordering::SeqCst) != stroke {
            return None;
        }
        Some(self.search(query).await)
    }

    /// Snapshot of the current visible result state.
    pub fn results(&self) -> SearchState {
        self.lock().state().clone()
    }

    /// The highest sequence number whose response has been applied.
    pub fn high_water(&self) -> u64 {
        self.lock().high_water()
    }

    fn lock(&self) -> MutexGuard<'_, SearchSequencer> {
        // The lock is only held for counter/state updates, never across an
        // await point; a poisoned lock still holds consistent data.
        self.sequencer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
