//! Subscription composition.
//!
//! Every asynchronous signal source the gallery listens to is declared here,
//! conditioned on the state that warrants it: the autoplay timer exists only
//! while there is content, the frame pulse only while a glide is in flight,
//! and the Escape listener only while the lightbox is open. Dropping a
//! subscription is its deterministic teardown.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::StreamExt;
use iced::keyboard::{self, key};
use iced::{event, time, window, Event, Subscription};

use crate::message::Message;
use crate::state::GalleryState;

/// Cadence of the interpolation pulse while a glide is animating.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub fn subscription(state: &GalleryState) -> Subscription<Message> {
    let mut subscriptions = vec![source_events(state), resize_events()];

    if state.autoplay.is_running() {
        subscriptions.push(time::every(state.autoplay.interval()).map(|_| Message::AutoplayTick));
    }

    if state.slide.is_transitioning() {
        subscriptions.push(time::every(FRAME_INTERVAL).map(|_| Message::AnimationTick));
    }

    if state.lightbox.is_open() {
        subscriptions.push(keyboard::on_key_press(|k, _modifiers| match k {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::LightboxDismissed),
            _ => None,
        }));
    }

    Subscription::batch(subscriptions)
}

/// The media source subscription; each snapshot replaces the collection.
fn source_events(state: &GalleryState) -> Subscription<Message> {
    let source = Arc::clone(&state.source);
    Subscription::run_with_id(
        "vitrine-media-source",
        source.subscribe().map(Message::Source),
    )
}

fn resize_events() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
