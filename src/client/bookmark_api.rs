//! REST endpoint bindings for Tagmarks.
//!
//! [`BookmarkBackend`] is the seam between the client and the backend; the
//! store and search session depend on the trait, tests substitute scripted
//! fakes, and [`BookmarkApi`] is the `reqwest` implementation talking to
//! the real REST surface.

use async_trait::async_trait;

use crate::client::rest_client::RestClient;
use crate::types::bookmark::{Bookmark, SearchResponse, TagCounts};
use crate::types::errors::ApiError;

/// Backend operations used by the store and search session.
#[async_trait]
pub trait BookmarkBackend: Send + Sync {
    /// Full-text search. `request_id` is echoed back in the response for
    /// stale-response suppression.
    async fn search(&self, query: &str, request_id: u64) -> Result<SearchResponse, ApiError>;
    async fn bookmark(&self, id: &str) -> Result<Bookmark, ApiError>;
    /// Creates a bookmark (the draft must have no id). Returns the
    /// backend-assigned id.
    async fn create(&self, bookmark: &Bookmark) -> Result<String, ApiError>;
    async fn update(&self, id: &str, bookmark: &Bookmark) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
    async fn all_tags(&self) -> Result<Vec<String>, ApiError>;
    async fn tag_counts(&self) -> Result<TagCounts, ApiError>;
}

/// `BookmarkBackend` implementation over the REST/JSON backend.
pub struct BookmarkApi {
    rest: RestClient,
}

impl BookmarkApi {
    pub fn new(rest: RestClient) -> Self {
        Self { rest }
    }
}

#[async_trait]
impl BookmarkBackend for BookmarkApi {
    /// `GET /rest/bookmarks?q=<query>&requestID=<n>`
    async fn search(&self, query: &str, request_id: u64) -> Result<SearchResponse, ApiError> {
        let url = self.rest.endpoint(&["rest", "bookmarks"])?;
        self.rest
            .get_json(
                url,
                &[("q", query.to_string()), ("requestID", request_id.to_string())],
            )
            .await
    }

    /// `GET /rest/bookmark/<id>`
    async fn bookmark(&self, id: &str) -> Result<Bookmark, ApiError> {
        let url = self.rest.endpoint(&["rest", "bookmark", id])?;
        self.rest.get_json(url, &[]).await
    }

    /// `POST /rest/bookmark`
    async fn create(&self, bookmark: &Bookmark) -> Result<String, ApiError> {
        let url = self.rest.endpoint(&["rest", "bookmark"])?;
        let created: Option<Bookmark> = self.rest.post_json(url, bookmark).await?;
        created
            .and_then(|b| b.id)
            .ok_or_else(|| {
                ApiError::Decode("Backend did not return the created bookmark id".to_string())
            })
    }

    /// `PUT /rest/bookmark/<id>`
    async fn update(&self, id: &str, bookmark: &Bookmark) -> Result<(), ApiError> {
        let url = self.rest.endpoint(&["rest", "bookmark", id])?;
        self.rest.put_json(url, bookmark).await
    }

    /// `DELETE /rest/bookmark/<id>`
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.rest.endpoint(&["rest", "bookmark", id])?;
        self.rest.delete(url).await
    }

    /// `GET /rest/bookmarks/tags`
    async fn all_tags(&self) -> Result<Vec<String>, ApiError> {
        let url = self.rest.endpoint(&["rest", "bookmarks", "tags"])?;
        self.rest.get_json(url, &[]).await
    }

    /// `GET /rest/bookmarks/tagCounts`
    async fn tag_counts(&self) -> Result<TagCounts, ApiError> {
        let url = self.rest.endpoint(&["rest", "bookmarks", "tagCounts"])?;
        self.rest.get_json(url, &[]).await
    }
}
