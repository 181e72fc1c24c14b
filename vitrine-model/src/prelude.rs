//! Convenience re-exports for downstream crates.

pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::events::SourceEvent;
pub use crate::ids::MediaItemId;
pub use crate::media::{sort_newest_first, MediaItem};
