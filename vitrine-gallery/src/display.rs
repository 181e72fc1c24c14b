//! Render-ready card derivation.
//!
//! `DisplayCard`s are ephemeral: one per media item, rebuilt from scratch on
//! every snapshot or palette change, never persisted.

use vitrine_model::{MediaItem, MediaItemId};

/// A media item decorated for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCard {
    pub id: MediaItemId,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Index into the decorative gradient palette.
    pub gradient: usize,
}

/// Derive cards from a snapshot, assigning each a deterministic gradient by
/// position in the collection.
pub fn decorate(items: &[MediaItem], palette_len: usize) -> Vec<DisplayCard> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| DisplayCard {
            id: item.id.clone(),
            url: item.url.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            gradient: if palette_len == 0 {
                0
            } else {
                index % palette_len
            },
        })
        .collect()
}
