use std::sync::Arc;

use vitrine_model::MediaItem;

use crate::autoplay::Autoplay;
use crate::config::GalleryConfig;
use crate::display::{decorate, DisplayCard};
use crate::image_cache::ImageCache;
use crate::lightbox::{LightboxState, ScrollLock};
use crate::loop_buffer::LoopBuffer;
use crate::slide::{Easing, SlideTransition};
use crate::source::MediaSource;
use crate::theme;
use crate::track::TrackState;
use crate::viewport::ViewportMonitor;

/// Width assumed until the first resize notification arrives.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Top-level gallery state: the engine modules plus shell bookkeeping.
pub struct GalleryState {
    pub config: GalleryConfig,
    pub source: Arc<dyn MediaSource>,

    // Data
    pub loading: bool,
    pub error_message: Option<String>,
    pub items: Vec<MediaItem>,
    pub cards: Vec<DisplayCard>,

    // Carousel engine
    pub strip: LoopBuffer,
    pub track: TrackState,
    pub slide: SlideTransition,
    /// Advances that arrived while a snap reset was pending; drained when
    /// the snap settles so nothing is dropped and nothing double-resets.
    pub queued_advances: u32,
    /// Bumped on every rebuild and every snap; stale settle timers carry an
    /// older stamp and are ignored.
    pub snap_generation: u64,
    pub autoplay: Autoplay,
    pub viewport: ViewportMonitor,

    // Lightbox
    pub lightbox: LightboxState,
    pub scroll_lock: ScrollLock,

    // Images
    pub images: ImageCache,
}

impl GalleryState {
    pub fn new(config: GalleryConfig, source: Arc<dyn MediaSource>) -> Self {
        let viewport = ViewportMonitor::new(DEFAULT_WINDOW_WIDTH, config.breakpoints());
        let slide = SlideTransition::new(0.0, config.slide_duration(), Easing::EaseInOutCubic);
        let autoplay = Autoplay::new(config.autoplay_interval());
        Self {
            config,
            source,
            loading: true,
            error_message: None,
            items: Vec::new(),
            cards: Vec::new(),
            strip: LoopBuffer::default(),
            track: TrackState::empty(),
            slide,
            queued_advances: 0,
            snap_generation: 0,
            autoplay,
            viewport,
            lightbox: LightboxState::default(),
            scroll_lock: ScrollLock::default(),
            images: ImageCache::new(),
        }
    }

    /// Replace the collection with a fresh snapshot and rebuild the strip,
    /// keeping the currently visible real item in view where possible.
    pub fn apply_snapshot(&mut self, items: Vec<MediaItem>) {
        let anchor = self.track.visible_real_index();
        let kept: Vec<MediaItem> = items
            .into_iter()
            .filter(|item| match item.validate() {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("dropping invalid media item: {err}");
                    false
                }
            })
            .collect();
        self.items = kept;
        self.cards = decorate(&self.items, theme::GRADIENTS.len());
        self.rebuild_strip(anchor);
    }

    /// Rebuild the padded sequence and re-initialize the position controller.
    ///
    /// Supersedes any in-flight snap settle: the generation stamp is bumped
    /// so a pending timer cannot re-enter the old track.
    pub fn rebuild_strip(&mut self, anchor: Option<usize>) {
        let per_page = self.viewport.cards_per_page();
        self.strip = LoopBuffer::build(&self.cards, per_page);
        self.track = TrackState::rebuild_anchored(self.cards.len(), per_page, anchor);
        self.slide = SlideTransition::new(
            self.track.offset_cards(),
            self.config.slide_duration(),
            Easing::EaseInOutCubic,
        );
        self.queued_advances = 0;
        self.snap_generation += 1;
        self.autoplay.sync(self.cards.len());
    }

    /// Width of a single card in logical pixels at the current page size.
    pub fn card_width(&self) -> f32 {
        let per_page = self.viewport.cards_per_page().max(1);
        self.viewport.width() / per_page as f32
    }

    /// Current strip translation in logical pixels.
    pub fn strip_offset_px(&self) -> f32 {
        self.slide.current() * self.card_width()
    }
}
