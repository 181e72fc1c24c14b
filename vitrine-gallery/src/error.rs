use thiserror::Error;

/// Errors surfaced by the gallery shell.
///
/// The carousel itself has no fatal failure modes; everything here is local
/// and recoverable by re-subscription or re-render.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("config io: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config parse: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("feed request failed: {0}")]
    Feed(#[from] reqwest::Error),

    #[error("media source: {0}")]
    Source(String),
}
