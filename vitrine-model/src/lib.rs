//! Core data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod error;
pub mod events;
pub mod ids;
pub mod media;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use error::ModelError;
pub use events::SourceEvent;
pub use ids::MediaItemId;
pub use media::{sort_newest_first, MediaItem};
