//! Application assembly for the desktop shell.

use std::sync::Arc;

use iced::{Size, Task};

use crate::config::GalleryConfig;
use crate::source::MediaSource;
use crate::state::GalleryState;
use crate::{subscriptions, theme, update, views};

/// Run the gallery against the provided media source.
pub fn run(config: GalleryConfig, source: Arc<dyn MediaSource>) -> iced::Result {
    iced::application("Vitrine Gallery", update::update, views::view)
        .subscription(subscriptions::subscription)
        .theme(|_state| theme::GalleryTheme::theme())
        .antialiasing(true)
        .window(iced::window::Settings {
            size: Size::new(1280.0, 720.0),
            ..Default::default()
        })
        .run_with(move || (GalleryState::new(config, source), Task::none()))
}
