//! View composition: loading / empty / strip states plus the lightbox
//! overlay stacked above whichever base is active.

pub mod cards;
pub mod gallery;
pub mod lightbox;

use iced::Element;

use crate::message::Message;
use crate::state::GalleryState;

pub fn view(state: &GalleryState) -> Element<'_, Message> {
    let base = if state.loading {
        gallery::view_loading()
    } else if state.cards.is_empty() {
        gallery::view_empty(state.error_message.as_deref())
    } else {
        gallery::view_gallery(state)
    };

    match state.lightbox.active_url() {
        Some(url) => lightbox::overlay(base, url, &state.images),
        None => base,
    }
}
