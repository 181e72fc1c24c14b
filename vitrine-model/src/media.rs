use crate::chrono::{DateTime, Utc};
use crate::error::{ModelError, Result};
use crate::ids::MediaItemId;

/// A single media item as delivered by the external store.
///
/// Snapshots are immutable from the consumer's perspective; edits arrive as a
/// fresh snapshot of the whole collection, never as in-place mutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    pub id: MediaItemId,
    pub url: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MediaItem {
    /// Construct an item with both timestamps set to `now`.
    pub fn new(id: MediaItemId, url: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            url: url.into(),
            title: None,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate the invariants the carousel relies on.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().is_empty() {
            return Err(ModelError::InvalidMedia("empty id".into()));
        }
        if self.url.is_empty() {
            return Err(ModelError::InvalidMedia(format!(
                "item {} has an empty url",
                self.id
            )));
        }
        Ok(())
    }
}

/// Sort a snapshot newest first, the order the store delivers and the
/// carousel renders.
pub fn sort_newest_first(items: &mut [MediaItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, created_offset_secs: i64) -> MediaItem {
        let mut item = MediaItem::new(MediaItemId::from(id), format!("https://cdn/{id}.jpg"));
        item.created_at = item.created_at + crate::chrono::Duration::seconds(created_offset_secs);
        item
    }

    #[test]
    fn validate_rejects_empty_url() {
        let mut bad = item("a", 0);
        bad.url.clear();
        assert!(bad.validate().is_err());
        assert!(item("a", 0).validate().is_ok());
    }

    #[test]
    fn newest_first_ordering() {
        let mut items = vec![item("old", 0), item("new", 60), item("mid", 30)];
        sort_newest_first(&mut items);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["new", "mid", "old"]);
    }
}
