//! Single mutation point for the gallery.
//!
//! Every asynchronous signal (autoplay ticks, frame pulses, resize
//! debounces, source snapshots, clicks, keyboard) lands here as a
//! [`Message`], so carousel and lightbox state change atomically with respect
//! to each other from the renderer's point of view.

use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::Task;
use vitrine_model::SourceEvent;

use crate::image_cache;
use crate::message::Message;
use crate::state::GalleryState;
use crate::views;

pub fn update(state: &mut GalleryState, message: Message) -> Task<Message> {
    match message {
        Message::Source(SourceEvent::Snapshot(items)) => {
            log::info!("media snapshot: {} items", items.len());
            state.loading = false;
            state.error_message = None;
            state.apply_snapshot(items);
            Task::batch([spawn_image_fetches(state), position_strip(state)])
        }
        Message::Source(SourceEvent::Error(message)) => {
            log::error!("media source error: {message}");
            state.loading = false;
            state.error_message = Some(message);
            Task::none()
        }

        // Autoplay and manual "next" share one path by design.
        Message::AutoplayTick | Message::NextRequested => advance(state),
        Message::PreviousRequested => retreat(state),

        Message::AnimationTick => {
            let finished = state.slide.update();
            if finished {
                Task::batch([position_strip(state), settle_boundary(state)])
            } else {
                position_strip(state)
            }
        }

        Message::SnapSettled(generation) => {
            if generation != state.snap_generation {
                // A rebuild superseded this snap; its track no longer exists.
                log::debug!("ignoring stale snap settle (generation {generation})");
                return Task::none();
            }
            state.track.finish_snap();
            if state.queued_advances > 0 {
                let queued = std::mem::take(&mut state.queued_advances);
                for _ in 0..queued {
                    state.track.advance();
                }
                state.slide.glide_to(state.track.offset_cards());
            }
            Task::none()
        }

        Message::WindowResized(size) => {
            let generation = state.viewport.observe(size.width);
            let delay = state.config.resize_debounce();
            Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |_| Message::ResizeSettled(generation),
            )
        }

        Message::ResizeSettled(generation) => {
            if let Some(per_page) = state.viewport.settle(generation) {
                log::info!("cards per page -> {per_page}");
                let anchor = state.track.visible_real_index();
                state.rebuild_strip(anchor);
            }
            // Card widths derive from the window width, so the strip needs
            // repositioning even when the page size did not change.
            position_strip(state)
        }

        Message::CardClicked(url) => {
            state.lightbox.open(&mut state.scroll_lock, url);
            Task::none()
        }
        Message::LightboxDismissed => {
            state.lightbox.close(&mut state.scroll_lock);
            Task::none()
        }

        Message::ImageFetched(url, Ok(handle)) => {
            state.images.set_loaded(url, handle);
            Task::none()
        }
        Message::ImageFetched(url, Err(err)) => {
            log::warn!("image load failed for {url}: {err}");
            state.images.set_failed(url);
            fetch_placeholder(state)
        }
    }
}

/// Move one card forward. An advance arriving while a snap reset is pending
/// queues behind it rather than being dropped or double-resetting.
fn advance(state: &mut GalleryState) -> Task<Message> {
    if !state.track.can_advance() {
        return Task::none();
    }
    if !state.track.transition_enabled() {
        state.queued_advances += 1;
        return Task::none();
    }
    if state.track.advance() {
        state.slide.glide_to(state.track.offset_cards());
    }
    Task::none()
}

fn retreat(state: &mut GalleryState) -> Task<Message> {
    if !state.track.can_advance() || !state.track.transition_enabled() {
        return Task::none();
    }
    if state.track.retreat() {
        state.slide.glide_to(state.track.offset_cards());
    }
    Task::none()
}

/// Boundary check, run only once the glide for the latest move has visually
/// completed. A crossing snaps the index un-animated and schedules the
/// settle that re-enables animation.
fn settle_boundary(state: &mut GalleryState) -> Task<Message> {
    let Some(snap) = state.track.settle() else {
        return Task::none();
    };
    log::debug!("boundary reset: {} -> {}", snap.from, snap.to);
    state.slide.jump_to(state.track.offset_cards());
    state.snap_generation += 1;
    let generation = state.snap_generation;
    let delay = state.config.snap_settle_delay();
    Task::batch([
        position_strip(state),
        Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Message::SnapSettled(generation),
        ),
    ])
}

/// Reposition the strip scrollable at the slide's current offset.
fn position_strip(state: &GalleryState) -> Task<Message> {
    if state.strip.is_empty() {
        return Task::none();
    }
    scrollable::scroll_to(
        views::gallery::strip_id(),
        AbsoluteOffset {
            x: state.strip_offset_px(),
            y: 0.0,
        },
    )
}

/// Kick off fetches for any card image not yet in the cache.
fn spawn_image_fetches(state: &mut GalleryState) -> Task<Message> {
    let mut tasks = Vec::new();
    for card in &state.cards {
        if state.images.contains(&card.url) {
            continue;
        }
        state.images.set_loading(card.url.clone());
        let url = card.url.clone();
        tasks.push(Task::perform(
            image_cache::fetch_image(url.clone()),
            move |result| Message::ImageFetched(url.clone(), result.map_err(|e| e.to_string())),
        ));
    }
    Task::batch(tasks)
}

/// Fetch the shared failure placeholder once; cards whose own image failed
/// render it instead. A failing placeholder degrades to the gradient card.
fn fetch_placeholder(state: &mut GalleryState) -> Task<Message> {
    let placeholder = state.config.placeholder_url.clone();
    if placeholder.is_empty() || state.images.contains(&placeholder) {
        return Task::none();
    }
    state.images.set_loading(placeholder.clone());
    Task::perform(
        image_cache::fetch_image(placeholder.clone()),
        move |result| {
            Message::ImageFetched(placeholder.clone(), result.map_err(|e| e.to_string()))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use vitrine_model::{MediaItem, MediaItemId};

    use crate::config::GalleryConfig;
    use crate::image_cache::ImageState;
    use crate::source::ChannelSource;

    fn test_state() -> GalleryState {
        let mut config = GalleryConfig::default();
        // glides complete on the first frame pulse, keeping tests deterministic
        config.slide_duration_ms = 0;
        let (source, _handle) = ChannelSource::new();
        GalleryState::new(config, Arc::new(source))
    }

    fn items(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| {
                MediaItem::new(
                    MediaItemId::from(format!("m{i}").as_str()),
                    format!("https://cdn/{i}.jpg"),
                )
                .with_title(format!("Item {i}"))
            })
            .collect()
    }

    fn deliver(state: &mut GalleryState, n: usize) {
        let _ = update(state, Message::Source(SourceEvent::Snapshot(items(n))));
    }

    /// One autoplay tick driven to visual completion.
    fn tick(state: &mut GalleryState) {
        let _ = update(state, Message::AutoplayTick);
        let _ = update(state, Message::AnimationTick);
    }

    #[test]
    fn snapshot_initializes_at_first_real_card() {
        let mut state = test_state();
        deliver(&mut state, 8);

        assert!(!state.loading);
        assert_eq!(state.strip.len(), 16);
        assert_eq!(state.track.current_index(), 4);
        assert_eq!(state.track.visible_real_index(), Some(0));
        assert!(state.autoplay.is_running());
        // every card image is being fetched
        assert!(state.images.contains("https://cdn/0.jpg"));
        assert!(state.images.contains("https://cdn/7.jpg"));
    }

    #[test]
    fn autoplay_cycle_snaps_after_crossing_the_edge() {
        let mut state = test_state();
        deliver(&mut state, 8);

        for expected in 5..=8 {
            tick(&mut state);
            assert_eq!(state.track.current_index(), expected);
            assert!(state.track.transition_enabled());
        }
        for _ in 0..3 {
            tick(&mut state);
        }
        assert_eq!(state.track.current_index(), 11);

        // the eighth tick reaches the boundary and snaps back to P
        tick(&mut state);
        assert_eq!(state.track.current_index(), 4);
        assert!(!state.track.transition_enabled());
        assert_eq!(state.track.visible_real_index(), Some(0));

        let snap_generation = state.snap_generation;
        let _ = update(&mut state, Message::SnapSettled(snap_generation));
        assert!(state.track.transition_enabled());
    }

    #[test]
    fn advances_queue_while_a_snap_is_pending() {
        let mut state = test_state();
        deliver(&mut state, 8);
        for _ in 0..8 {
            tick(&mut state);
        }
        assert!(!state.track.transition_enabled());

        let _ = update(&mut state, Message::AutoplayTick);
        let _ = update(&mut state, Message::NextRequested);
        assert_eq!(state.queued_advances, 2);
        assert_eq!(state.track.current_index(), 4);

        let snap_generation = state.snap_generation;
        let _ = update(&mut state, Message::SnapSettled(snap_generation));
        assert_eq!(state.queued_advances, 0);
        assert_eq!(state.track.current_index(), 6);
    }

    #[test]
    fn rebuild_supersedes_a_pending_snap_settle() {
        let mut state = test_state();
        deliver(&mut state, 8);
        for _ in 0..8 {
            tick(&mut state);
        }
        assert!(!state.track.transition_enabled());
        let stale = state.snap_generation;

        // a fresh snapshot lands during the settle window
        deliver(&mut state, 5);
        assert!(state.track.transition_enabled());
        let index_after_rebuild = state.track.current_index();

        let _ = update(&mut state, Message::SnapSettled(stale));
        assert_eq!(state.track.current_index(), index_after_rebuild);
        assert!(state.track.transition_enabled());
    }

    #[test]
    fn breakpoint_resize_rebuilds_and_keeps_the_visible_item() {
        let mut state = test_state();
        deliver(&mut state, 8);
        for _ in 0..3 {
            tick(&mut state);
        }
        assert_eq!(state.track.visible_real_index(), Some(3));

        let _ = update(
            &mut state,
            Message::WindowResized(iced::Size::new(600.0, 900.0)),
        );
        let _ = update(&mut state, Message::ResizeSettled(1));

        assert_eq!(state.viewport.cards_per_page(), 1);
        assert_eq!(state.strip.len(), 8 + 2);
        assert_eq!(state.track.visible_real_index(), Some(3));
        assert!(state.track.transition_enabled());
    }

    #[test]
    fn lightbox_click_escape_and_replace() {
        let mut state = test_state();
        deliver(&mut state, 2);

        let _ = update(&mut state, Message::CardClicked("https://x/a.jpg".into()));
        assert_eq!(state.lightbox.active_url(), Some("https://x/a.jpg"));
        assert!(state.scroll_lock.is_locked());

        // opening a second card replaces without an intermediate close
        let _ = update(&mut state, Message::CardClicked("https://x/b.jpg".into()));
        assert_eq!(state.lightbox.active_url(), Some("https://x/b.jpg"));
        assert!(state.scroll_lock.is_locked());

        let _ = update(&mut state, Message::LightboxDismissed);
        assert_eq!(state.lightbox.active_url(), None);
        assert!(!state.scroll_lock.is_locked());
    }

    #[test]
    fn empty_snapshot_suppresses_motion() {
        let mut state = test_state();
        deliver(&mut state, 0);

        assert!(state.strip.is_empty());
        assert!(!state.autoplay.is_running());

        let _ = update(&mut state, Message::AutoplayTick);
        let _ = update(&mut state, Message::AnimationTick);
        assert_eq!(state.track.current_index(), 0);
    }

    #[test]
    fn source_errors_surface_without_retry() {
        let mut state = test_state();
        let _ = update(
            &mut state,
            Message::Source(SourceEvent::Error("permission denied".into())),
        );
        assert!(!state.loading);
        assert_eq!(state.error_message.as_deref(), Some("permission denied"));
    }

    #[test]
    fn failed_image_falls_back_to_the_placeholder() {
        let mut state = test_state();
        deliver(&mut state, 1);
        let url = "https://cdn/0.jpg".to_string();

        let _ = update(
            &mut state,
            Message::ImageFetched(url.clone(), Err("404".into())),
        );
        assert!(matches!(state.images.state(&url), Some(ImageState::Failed)));
        assert!(matches!(
            state.images.state(&state.config.placeholder_url),
            Some(ImageState::Loading)
        ));
    }

    #[test]
    fn invalid_items_are_dropped_not_fatal() {
        let mut state = test_state();
        let mut snapshot = items(3);
        snapshot[1].url.clear();
        let _ = update(&mut state, Message::Source(SourceEvent::Snapshot(snapshot)));
        assert_eq!(state.cards.len(), 2);
        assert_eq!(state.strip.len(), 2 + 2 * 4);
    }
}
