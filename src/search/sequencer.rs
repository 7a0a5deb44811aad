//! Search request sequencing for Tagmarks.
//!
//! Incremental search issues a request per (debounced) keystroke without
//! cancelling earlier ones. Responses may therefore arrive out of order;
//! the sequencer tags each dispatch with a monotonically increasing
//! sequence number and discards any response that arrives after a newer
//! one has already been applied.

use crate::types::bookmark::{Hit, SearchResponse};

/// The visible result state: what a UI would currently display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub hits: Vec<Hit>,
    pub total_hits: u64,
    /// Backend-reported or transport-level failure flag for the search box.
    pub error: bool,
}

/// Result of dispatching a query change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank query: results were cleared, no request should be issued and
    /// no sequence number was consumed.
    Cleared,
    /// A request should be issued carrying this sequence number.
    Issued(u64),
}

/// Result of offering a response (or failure) to the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was newer than anything applied so far; state updated.
    Applied,
    /// The response was stale (or a duplicate) and was discarded.
    Stale,
}

/// Stale-response suppression for incremental search.
///
/// Single-threaded by design: all methods take `&mut self` and the struct
/// holds only the sequence counter, the high-water mark of applied
/// responses, and the visible state.
#[derive(Debug, Default)]
pub struct SearchSequencer {
    last_issued: u64,
    high_water: u64,
    state: SearchState,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a query change.
    ///
    /// A blank (empty or whitespace-only) query clears the visible results
    /// and error flag immediately; no request is issued and no sequence
    /// number is consumed. Any other query is assigned the next sequence
    /// number, starting at 1.
    pub fn dispatch(&mut self, query: &str) -> Dispatch {
        if query.trim().is_empty() {
            self.state = SearchState::default();
            return Dispatch::Cleared;
        }

        self.last_issued += 1;
        Dispatch::Issued(self.last_issued)
    }

    /// Offers a search response for application to the visible state.
    ///
    /// A response whose echoed sequence number is at or below the high-water
    /// mark is discarded: equal means already applied, lower means a newer
    /// response has superseded it. Otherwise the response becomes the new
    /// visible state and its sequence number the new high-water mark.
    pub fn apply(&mut self, response: SearchResponse) -> Outcome {
        if response.request_id <= self.high_water {
            log::debug!(
                "discarding stale search response {} (high water {})",
                response.request_id,
                self.high_water
            );
            return Outcome::Stale;
        }

        self.high_water = response.request_id;
        self.state = SearchState {
            hits: response.hits,
            total_hits: response.total_hits,
            error: response.error,
        };
        Outcome::Applied
    }

    /// Records a transport-level failure for the request with the given
    /// sequence number.
    ///
    /// Subject to the same staleness rule as [`apply`](Self::apply): a stale
    /// failure must not clobber results from a newer request. An applied
    /// failure raises the error flag but leaves the current hits in place.
    pub fn apply_failure(&mut self, request_id: u64) -> Outcome {
        if request_id <= self.high_water {
            return Outcome::Stale;
        }

        self.high_water = request_id;
        self.state.error = true;
        Outcome::Applied
    }

    /// The current visible result state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// The sequence number most recently handed out by `dispatch`.
    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// The highest sequence number whose response has been applied.
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
