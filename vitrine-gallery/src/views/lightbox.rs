//! Full-screen lightbox overlay.
//!
//! Stacked above whatever base view is active. Clicks on the backdrop
//! dismiss; clicks on the image itself do not propagate to the backdrop.

use iced::widget::{button, center, container, image, mouse_area, opaque, stack, text};
use iced::{ContentFit, Element, Length};

use crate::image_cache::ImageCache;
use crate::message::Message;
use crate::theme::{self, GalleryTheme};

pub fn overlay<'a>(
    base: Element<'a, Message>,
    url: &str,
    images: &'a ImageCache,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match images.loaded(url) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        None => text("Loading image...")
            .size(18)
            .color(GalleryTheme::TEXT_SECONDARY)
            .into(),
    };

    let close = button(text("\u{2715}").size(18))
        .padding(10)
        .style(theme::close_button)
        .on_press(Message::LightboxDismissed);

    let panel = container(stack![
        container(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center),
        container(close)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Right)
            .padding(16),
    ])
    .style(theme::Container::Modal.style())
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(24);

    let backdrop = mouse_area(
        container(center(opaque(panel)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::Container::ModalOverlay.style()),
    )
    .on_press(Message::LightboxDismissed);

    stack![base, opaque(backdrop)].into()
}
