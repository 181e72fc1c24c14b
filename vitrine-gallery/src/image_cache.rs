use std::collections::HashMap;

use iced::widget::image;

/// Load state of a single card image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// Per-url image cache, owned by the gallery state and mutated exclusively
/// from the update loop.
#[derive(Debug, Clone, Default)]
pub struct ImageCache {
    entries: HashMap<String, ImageState>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.entries.get(url)
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn set_loading(&mut self, url: String) {
        self.entries.insert(url, ImageState::Loading);
    }

    pub fn set_loaded(&mut self, url: String, handle: image::Handle) {
        self.entries.insert(url, ImageState::Loaded(handle));
    }

    pub fn set_failed(&mut self, url: String) {
        self.entries.insert(url, ImageState::Failed);
    }

    pub fn loaded(&self, url: &str) -> Option<&image::Handle> {
        match self.entries.get(url) {
            Some(ImageState::Loaded(handle)) => Some(handle),
            _ => None,
        }
    }
}

/// Fetch an image over HTTP and wrap it for the renderer.
pub async fn fetch_image(url: String) -> Result<image::Handle, anyhow::Error> {
    log::debug!("fetching image {url}");

    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        log::warn!("image fetch failed: {} - {}", url, response.status());
        return Err(anyhow::anyhow!("image fetch failed: {}", response.status()));
    }

    let bytes = response.bytes().await?;
    Ok(image::Handle::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_transition_per_url() {
        let mut cache = ImageCache::new();
        assert!(!cache.contains("a"));

        cache.set_loading("a".into());
        assert!(matches!(cache.state("a"), Some(ImageState::Loading)));
        assert!(cache.loaded("a").is_none());

        cache.set_failed("a".into());
        assert!(matches!(cache.state("a"), Some(ImageState::Failed)));

        cache.set_loaded("a".into(), image::Handle::from_bytes(vec![0u8; 4]));
        assert!(cache.loaded("a").is_some());
        // sibling urls are unaffected
        assert!(!cache.contains("b"));
    }
}
