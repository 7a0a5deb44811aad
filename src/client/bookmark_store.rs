//! Bookmark CRUD client for Tagmarks.
//!
//! Orchestrates validation, backend calls and cache invalidation: required
//! fields are checked before anything touches the network, reads consult
//! the [`QueryCache`] first, and every successful mutation invalidates the
//! read state it could have made stale.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::client::bookmark_api::BookmarkBackend;
use crate::client::query_cache::QueryCache;
use crate::types::bookmark::{Bookmark, SearchResponse, TagCounts};
use crate::types::errors::{ClientError, ValidationError};

/// Cache staleness window used by [`BookmarkStore::new`].
pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(15 * 60);

/// CRUD client over a [`BookmarkBackend`] with cached reads.
pub struct BookmarkStore {
    backend: Arc<dyn BookmarkBackend>,
    cache: Mutex<QueryCache>,
}

impl BookmarkStore {
    pub fn new(backend: Arc<dyn BookmarkBackend>) -> Self {
        Self::with_stale_after(backend, DEFAULT_STALE_AFTER)
    }

    pub fn with_stale_after(backend: Arc<dyn BookmarkBackend>, stale_after: Duration) -> Self {
        Self {
            backend,
            cache: Mutex::new(QueryCache::new(stale_after)),
        }
    }

    /// Checks the client-side required-field rules.
    ///
    /// Validation failures never reach the network layer.
    pub fn validate(bookmark: &Bookmark) -> Result<(), ValidationError> {
        if bookmark.url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if bookmark.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Creates a bookmark from a draft without an id. Returns the
    /// backend-assigned id.
    pub async fn create(&self, draft: &Bookmark) -> Result<String, ClientError> {
        Self::validate(draft)?;
        let id = self.backend.create(draft).await?;
        self.lock_cache().invalidate_after_create();
        Ok(id)
    }

    /// Updates an existing bookmark. The bookmark must carry its id.
    pub async fn update(&self, bookmark: &Bookmark) -> Result<(), ClientError> {
        Self::validate(bookmark)?;
        let id = bookmark
            .id
            .as_deref()
            .ok_or(ValidationError::MissingId)?;
        self.backend.update(id, bookmark).await?;
        self.lock_cache().invalidate_after_update(id);
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), ClientError> {
        self.backend.delete(id).await?;
        self.lock_cache().invalidate_after_delete(id);
        Ok(())
    }

    /// Fetches a bookmark by id, serving from cache within the staleness
    /// window.
    pub async fn bookmark(&self, id: &str) -> Result<Bookmark, ClientError> {
        if let Some(cached) = self.lock_cache().bookmark(id).cloned() {
            return Ok(cached);
        }
        let bookmark = self.backend.bookmark(id).await?;
        self.lock_cache().store_bookmark(id, bookmark.clone());
        Ok(bookmark)
    }

    /// Cached one-shot search.
    ///
    /// This is the non-interactive path (result pages, prefetching): no
    /// sequence numbers are involved, responses are cached by query string.
    /// A blank query short-circuits to an empty response without a request.
    /// Incremental per-keystroke search lives in `search::SearchSession`.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        if query.trim().is_empty() {
            return Ok(SearchResponse::default());
        }
        if let Some(cached) = self.lock_cache().search(query).cloned() {
            return Ok(cached);
        }
        let response = self.backend.search(query, 0).await?;
        self.lock_cache().store_search(query, response.clone());
        Ok(response)
    }

    pub async fn all_tags(&self) -> Result<Vec<String>, ClientError> {
        if let Some(cached) = self.lock_cache().tags().cloned() {
            return Ok(cached);
        }
        let tags = self.backend.all_tags().await?;
        self.lock_cache().store_tags(tags.clone());
        Ok(tags)
    }

    pub async fn tag_counts(&self) -> Result<TagCounts, ClientError> {
        if let Some(cached) = self.lock_cache().tag_counts().cloned() {
            return Ok(cached);
        }
        let counts = self.backend.tag_counts().await?;
        self.lock_cache().store_tag_counts(counts.clone());
        Ok(counts)
    }

    fn lock_cache(&self) -> MutexGuard<'_, QueryCache> {
        // Never held across an await point.
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
