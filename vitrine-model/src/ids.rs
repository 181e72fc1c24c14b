use crate::error::{ModelError, Result};

/// Strongly typed id for media items.
///
/// Ids are opaque strings assigned by the external media store; the carousel
/// never derives meaning from their contents beyond uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MediaItemId(pub String);

impl MediaItemId {
    /// Wrap a raw store id, rejecting empty ids.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ModelError::InvalidId("empty media item id".into()));
        }
        Ok(MediaItemId(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MediaItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MediaItemId {
    fn from(raw: &str) -> Self {
        MediaItemId(raw.to_string())
    }
}

impl std::fmt::Display for MediaItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
