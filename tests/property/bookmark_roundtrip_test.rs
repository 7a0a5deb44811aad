//! Property-based tests for bookmark CRUD round-trips and validation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use proptest::prelude::*;

use tagmarks::client::bookmark_api::BookmarkBackend;
use tagmarks::client::bookmark_store::BookmarkStore;
use tagmarks::types::bookmark::{Bookmark, SearchResponse, TagCounts};
use tagmarks::types::errors::{ApiError, ClientError, ValidationError};

/// Minimal in-memory backend: create assigns ids, fetch returns stored
/// records verbatim.
#[derive(Default)]
struct MemoryBackend {
    records: Mutex<HashMap<String, Bookmark>>,
    next_id: AtomicU64,
}

#[async_trait]
impl BookmarkBackend for MemoryBackend {
    async fn search(&self, _query: &str, request_id: u64) -> Result<SearchResponse, ApiError> {
        Ok(SearchResponse {
            request_id,
            ..SearchResponse::default()
        })
    }

    async fn bookmark(&self, id: &str) -> Result<Bookmark, ApiError> {
        self.records
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::Status(404, "Not Found".to_string()))
    }

    async fn create(&self, bookmark: &Bookmark) -> Result<String, ApiError> {
        let id = format!("bm-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let mut stored = bookmark.clone();
        stored.id = Some(id.clone());
        self.records.lock().unwrap().insert(id.clone(), stored);
        Ok(id)
    }

    async fn update(&self, id: &str, bookmark: &Bookmark) -> Result<(), ApiError> {
        self.records
            .lock()
            .unwrap()
            .insert(id.to_string(), bookmark.clone());
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.records.lock().unwrap().remove(id);
        Ok(())
    }

    async fn all_tags(&self) -> Result<Vec<String>, ApiError> {
        Ok(vec![])
    }

    async fn tag_counts(&self) -> Result<TagCounts, ApiError> {
        Ok(TagCounts::new())
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime")
}

/// Strategy for valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
    )
        .prop_map(|(scheme, host, tld)| format!("{}://{}{}", scheme, host, tld))
}

/// Strategy for non-blank titles.
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,30}"
}

/// Strategy for tag sets (possibly empty, duplicates allowed).
fn arb_tags() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,10}", 0..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// For any valid bookmark, create-then-fetch by the returned id
    /// yields the submitted url/title/description/tags.
    #[test]
    fn create_then_fetch_preserves_fields(
        url in arb_url(),
        title in arb_title(),
        description in "[ -~]{0,40}",
        tags in arb_tags(),
    ) {
        let backend = Arc::new(MemoryBackend::default());
        let store = BookmarkStore::with_stale_after(backend, Duration::from_secs(900));

        let draft = Bookmark {
            id: None,
            url,
            title,
            description,
            tags,
        };

        let fetched = runtime().block_on(async {
            let id = store.create(&draft).await?;
            store.bookmark(&id).await
        });

        let fetched = fetched.expect("create and fetch must succeed for valid drafts");
        prop_assert_eq!(fetched.url, draft.url);
        prop_assert_eq!(fetched.title, draft.title);
        prop_assert_eq!(fetched.description, draft.description);
        prop_assert_eq!(fetched.tags, draft.tags);
        prop_assert!(fetched.id.is_some());
    }

    /// Whitespace-only required fields are always rejected before dispatch.
    #[test]
    fn blank_required_fields_are_rejected(
        blank in "[ \t]{0,4}",
        title in arb_title(),
        url in arb_url(),
    ) {
        let backend = Arc::new(MemoryBackend::default());
        let store = BookmarkStore::with_stale_after(backend.clone(), Duration::from_secs(900));

        let no_url = Bookmark { id: None, url: blank.clone(), title, description: String::new(), tags: vec![] };
        let result = runtime().block_on(store.create(&no_url));
        prop_assert_eq!(result.unwrap_err(), ClientError::Validation(ValidationError::EmptyUrl));

        let no_title = Bookmark { id: None, url, title: blank, description: String::new(), tags: vec![] };
        let result = runtime().block_on(store.create(&no_title));
        prop_assert_eq!(result.unwrap_err(), ClientError::Validation(ValidationError::EmptyTitle));

        prop_assert!(backend.records.lock().unwrap().is_empty());
    }
}
