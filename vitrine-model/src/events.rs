use std::fmt;

use crate::media::MediaItem;

/// Change notification emitted by a media source.
///
/// Every data change arrives as a complete, already-ordered snapshot of the
/// collection; consumers replace their copy wholesale rather than patching.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SourceEvent {
    /// Full replacement snapshot, newest item first.
    Snapshot(Vec<MediaItem>),
    /// The source failed; the consumer renders an empty state and does not
    /// retry on its own.
    Error(String),
}

impl fmt::Debug for SourceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEvent::Snapshot(items) => {
                write!(f, "SourceEvent::Snapshot({} items)", items.len())
            }
            SourceEvent::Error(msg) => write!(f, "SourceEvent::Error({msg:?})"),
        }
    }
}

impl SourceEvent {
    pub fn is_error(&self) -> bool {
        matches!(self, SourceEvent::Error(_))
    }
}
