use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::viewport::Breakpoints;

/// Recognized gallery options, persisted as JSON in the platform config dir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Cadence of automatic forward advancement.
    pub autoplay_interval_ms: u64,
    /// Length of the animated glide between card positions.
    pub slide_duration_ms: u64,
    /// Hold between the wrap-around snap and re-enabling animation, so the
    /// renderer applies the un-animated position first.
    pub snap_settle_delay_ms: u64,
    /// Coalescing window for resize notifications.
    pub resize_debounce_ms: u64,
    pub cards_per_page_desktop: usize,
    pub cards_per_page_mobile: usize,
    pub responsive_breakpoint_px: f32,
    /// Poll cadence of the REST feed adapter.
    pub feed_poll_interval_ms: u64,
    /// Image shown when a card's own image fails to load.
    pub placeholder_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 3000,
            slide_duration_ms: 600,
            snap_settle_delay_ms: 50,
            resize_debounce_ms: 150,
            cards_per_page_desktop: 4,
            cards_per_page_mobile: 1,
            responsive_breakpoint_px: 768.0,
            feed_poll_interval_ms: 30_000,
            placeholder_url:
                "https://via.placeholder.com/600x800/f3f4f6/9ca3af?text=Image+Not+Found"
                    .to_string(),
        }
    }
}

impl GalleryConfig {
    /// Load from the platform config dir, falling back to defaults on any
    /// failure.
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("vitrine-gallery").join("config.json");
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(err) => {
                        log::warn!(
                            "failed to load config from {}: {err}; using defaults",
                            config_path.display()
                        );
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> Result<Self, GalleryError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist to the platform config dir.
    pub fn save(&self) -> Result<(), GalleryError> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("vitrine-gallery");
            std::fs::create_dir_all(&app_dir)?;
            self.save_to(&app_dir.join("config.json"))?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), GalleryError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_duration_ms)
    }

    pub fn snap_settle_delay(&self) -> Duration {
        Duration::from_millis(self.snap_settle_delay_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn feed_poll_interval(&self) -> Duration {
        Duration::from_millis(self.feed_poll_interval_ms)
    }

    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            breakpoint_px: self.responsive_breakpoint_px,
            mobile: self.cards_per_page_mobile,
            desktop: self.cards_per_page_desktop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");

        let mut config = GalleryConfig::default();
        config.autoplay_interval_ms = 5000;
        config.cards_per_page_desktop = 6;
        config.save_to(&path).expect("save");

        let loaded = GalleryConfig::load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_files_fall_back_to_defaults_per_field() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "autoplay_interval_ms": 1000 }"#).expect("write");

        let loaded = GalleryConfig::load_from(&path).expect("load");
        assert_eq!(loaded.autoplay_interval_ms, 1000);
        assert_eq!(loaded.cards_per_page_desktop, 4);
        assert_eq!(loaded.responsive_breakpoint_px, 768.0);
    }

    #[test]
    fn garbage_files_error_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(GalleryConfig::load_from(&path).is_err());
    }
}
