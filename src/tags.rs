//! Tag cloud shaping for Tagmarks.
//!
//! Turns the backend's tag counts into deterministic display entries with
//! linearly scaled sizes, for a UI tag cloud.

use crate::types::bookmark::TagCounts;

pub const MIN_SIZE: f32 = 1.0;
pub const MAX_SIZE: f32 = 5.0;

/// One tag in the cloud, with its display size.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCloudEntry {
    pub value: String,
    pub count: u64,
    /// Font size in the `min_size..=max_size` range passed to [`tag_cloud`].
    pub size: f32,
}

/// Shapes tag counts into cloud entries.
///
/// Sizes scale linearly between `min_size` (least frequent tag) and
/// `max_size` (most frequent). When all counts are equal every entry gets
/// `min_size`. Entries are sorted by tag name for stable rendering.
pub fn tag_cloud(counts: &TagCounts, min_size: f32, max_size: f32) -> Vec<TagCloudEntry> {
    let Some(min_count) = counts.values().copied().min() else {
        return Vec::new();
    };
    let max_count = counts.values().copied().max().unwrap_or(min_count);
    let spread = (max_count - min_count) as f32;

    let mut entries: Vec<TagCloudEntry> = counts
        .iter()
        .map(|(tag, &count)| {
            let size = if spread == 0.0 {
                min_size
            } else {
                min_size + (count - min_count) as f32 / spread * (max_size - min_size)
            };
            TagCloudEntry {
                value: tag.clone(),
                count,
                size,
            }
        })
        .collect();

    entries.sort_by(|a, b| a.value.cmp(&b.value));
    entries
}
