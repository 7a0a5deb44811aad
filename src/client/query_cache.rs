//! Read cache for Tagmarks.
//!
//! Caches backend reads (bookmark by id, tag list, tag counts, search
//! responses by query string) with a staleness window. Mutations invalidate
//! exactly the reads that could now be stale; subsequent reads refetch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::types::bookmark::{Bookmark, SearchResponse, TagCounts};

struct Entry<T> {
    value: T,
    fetched_at: Instant,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            fetched_at: Instant::now(),
        }
    }

    fn fresh(&self, stale_after: Duration) -> Option<&T> {
        if self.fetched_at.elapsed() < stale_after {
            Some(&self.value)
        } else {
            None
        }
    }
}

/// Cache of backend read state with per-entry fetch timestamps.
pub struct QueryCache {
    stale_after: Duration,
    bookmarks: HashMap<String, Entry<Bookmark>>,
    tags: Option<Entry<Vec<String>>>,
    tag_counts: Option<Entry<TagCounts>>,
    searches: HashMap<String, Entry<SearchResponse>>,
}

impl QueryCache {
    /// Creates a cache whose entries go stale `stale_after` after fetch.
    pub fn new(stale_after: Duration) -> Self {
        Self {
            stale_after,
            bookmarks: HashMap::new(),
            tags: None,
            tag_counts: None,
            searches: HashMap::new(),
        }
    }

    pub fn bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.get(id).and_then(|e| e.fresh(self.stale_after))
    }

    pub fn store_bookmark(&mut self, id: &str, bookmark: Bookmark) {
        self.bookmarks.insert(id.to_string(), Entry::new(bookmark));
    }

    pub fn tags(&self) -> Option<&Vec<String>> {
        self.tags.as_ref().and_then(|e| e.fresh(self.stale_after))
    }

    pub fn store_tags(&mut self, tags: Vec<String>) {
        self.tags = Some(Entry::new(tags));
    }

    pub fn tag_counts(&self) -> Option<&TagCounts> {
        self.tag_counts
            .as_ref()
            .and_then(|e| e.fresh(self.stale_after))
    }

    pub fn store_tag_counts(&mut self, counts: TagCounts) {
        self.tag_counts = Some(Entry::new(counts));
    }

    pub fn search(&self, query: &str) -> Option<&SearchResponse> {
        self.searches.get(query).and_then(|e| e.fresh(self.stale_after))
    }

    pub fn store_search(&mut self, query: &str, response: SearchResponse) {
        self.searches.insert(query.to_string(), Entry::new(response));
    }

    pub fn invalidate_bookmark(&mut self, id: &str) {
        self.bookmarks.remove(id);
    }

    pub fn invalidate_searches(&mut self) {
        self.searches.clear();
    }

    pub fn invalidate_tag_state(&mut self) {
        self.tags = None;
        self.tag_counts = None;
    }

    /// Invalidation set after a successful create: the new bookmark can
    /// appear in any search and changes the tag list and counts.
    pub fn invalidate_after_create(&mut self) {
        self.invalidate_searches();
        self.invalidate_tag_state();
    }

    /// Invalidation set after a successful update of the given bookmark.
    pub fn invalidate_after_update(&mut self, id: &str) {
        self.invalidate_bookmark(id);
        self.invalidate_searches();
        self.invalidate_tag_state();
    }

    /// Invalidation set after a successful delete of the given bookmark.
    pub fn invalidate_after_delete(&mut self, id: &str) {
        self.invalidate_bookmark(id);
        self.invalidate_searches();
        self.invalidate_tag_state();
    }
}
