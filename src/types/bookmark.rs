use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A bookmark record as exchanged with the backend.
///
/// The id is assigned by the backend (`objectID` on the wire) and is absent
/// until the bookmark has been saved for the first time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(rename = "objectID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A search hit: the display projection of a bookmark.
///
/// Title, URL and description carry pre-rendered HTML fragments produced by
/// the backend (match highlighting). Consumed read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub id: String,
    pub url: String,
    #[serde(rename = "urlHTML")]
    pub url_html: String,
    #[serde(rename = "titleHTML")]
    pub title_html: String,
    #[serde(rename = "descriptionHTML", default)]
    pub description_html: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Response body of `GET /rest/bookmarks?q=<query>&requestID=<n>`.
///
/// `request_id` echoes the sequence number sent with the request and drives
/// stale-response suppression. `error` is the backend's in-band failure flag
/// (a failed search still answers 200 with `error: true` and no hits).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "requestID")]
    pub request_id: u64,
    #[serde(rename = "totalHits", default)]
    pub total_hits: u64,
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub hits: Vec<Hit>,
    #[serde(rename = "topTerms", default)]
    pub top_terms: Vec<String>,
    #[serde(rename = "tagTopTerms", default)]
    pub tag_top_terms: Vec<String>,
}

/// Mapping of tag name to the number of bookmarks carrying it.
pub type TagCounts = HashMap<String, u64>;
