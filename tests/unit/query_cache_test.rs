//! Unit tests for the read cache and its invalidation sets.

use std::time::Duration;

use tagmarks::client::query_cache::QueryCache;
use tagmarks::types::bookmark::{Bookmark, SearchResponse, TagCounts};

fn bookmark(id: &str) -> Bookmark {
    Bookmark {
        id: Some(id.to_string()),
        url: format!("https://example.com/{}", id),
        title: id.to_string(),
        description: String::new(),
        tags: vec!["misc".to_string()],
    }
}

fn warm_cache() -> QueryCache {
    let mut cache = QueryCache::new(Duration::from_secs(900));
    cache.store_bookmark("a", bookmark("a"));
    cache.store_bookmark("b", bookmark("b"));
    cache.store_tags(vec!["misc".to_string()]);
    cache.store_tag_counts(TagCounts::from([("misc".to_string(), 2)]));
    cache.store_search("query", SearchResponse::default());
    cache
}

/// Stored entries are served back while fresh.
#[test]
fn test_fresh_entries_are_served() {
    let cache = warm_cache();

    assert!(cache.bookmark("a").is_some());
    assert!(cache.tags().is_some());
    assert!(cache.tag_counts().is_some());
    assert!(cache.search("query").is_some());
    assert!(cache.bookmark("missing").is_none());
    assert!(cache.search("other").is_none());
}

/// A zero staleness window means every entry is immediately stale.
#[test]
fn test_zero_window_is_always_stale() {
    let mut cache = QueryCache::new(Duration::ZERO);
    cache.store_bookmark("a", bookmark("a"));
    cache.store_tags(vec!["misc".to_string()]);

    assert!(cache.bookmark("a").is_none());
    assert!(cache.tags().is_none());
}

/// Create invalidates searches and tag state but keeps bookmark entries.
#[test]
fn test_invalidate_after_create() {
    let mut cache = warm_cache();

    cache.invalidate_after_create();

    assert!(cache.search("query").is_none());
    assert!(cache.tags().is_none());
    assert!(cache.tag_counts().is_none());
    assert!(cache.bookmark("a").is_some());
    assert!(cache.bookmark("b").is_some());
}

/// Update invalidates the affected bookmark plus searches and tag state;
/// other bookmarks stay cached.
#[test]
fn test_invalidate_after_update() {
    let mut cache = warm_cache();

    cache.invalidate_after_update("a");

    assert!(cache.bookmark("a").is_none());
    assert!(cache.bookmark("b").is_some());
    assert!(cache.search("query").is_none());
    assert!(cache.tags().is_none());
    assert!(cache.tag_counts().is_none());
}

/// Delete uses the same invalidation set as update.
#[test]
fn test_invalidate_after_delete() {
    let mut cache = warm_cache();

    cache.invalidate_after_delete("b");

    assert!(cache.bookmark("b").is_none());
    assert!(cache.bookmark("a").is_some());
    assert!(cache.search("query").is_none());
    assert!(cache.tags().is_none());
    assert!(cache.tag_counts().is_none());
}
