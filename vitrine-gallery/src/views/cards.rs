//! A single media card in the strip.

use iced::widget::{column, container, image, mouse_area, stack, text, Space};
use iced::{Border, ContentFit, Element, Length};

use crate::display::DisplayCard;
use crate::image_cache::{ImageCache, ImageState};
use crate::message::Message;
use crate::theme::{self, GalleryTheme};

/// Card height inside the strip; width comes from the page size.
pub const CARD_HEIGHT: f32 = 340.0;
const CARD_GUTTER: f32 = 8.0;

/// Render one card slot. The slot occupies exactly `width` so the strip's
/// pixel offset math stays aligned with the card index.
pub fn media_card<'a>(
    card: &'a DisplayCard,
    images: &'a ImageCache,
    placeholder_url: &str,
    width: f32,
) -> Element<'a, Message> {
    let gradient = card.gradient;

    let picture: Element<'a, Message> = match resolve_image(card, images, placeholder_url) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .into(),
        // gradient backdrop carries the card while the image is absent
        None => Space::new(Length::Fill, Length::Fill).into(),
    };

    let mut layers = stack![
        container(picture)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(theme::card_gradient(gradient)),
                border: Border {
                    color: GalleryTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                ..container::Style::default()
            })
    ];

    if let Some(title) = &card.title {
        let mut caption = column![text(title.as_str()).size(15)].spacing(2);
        if let Some(description) = &card.description {
            caption = caption.push(
                text(description.as_str())
                    .size(12)
                    .color(GalleryTheme::TEXT_SECONDARY),
            );
        }
        layers = layers.push(
            container(
                container(caption)
                    .style(theme::Container::Caption.style())
                    .padding([6, 10]),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(iced::alignment::Vertical::Bottom)
            .padding(12),
        );
    }

    // outer container keeps the slot at exactly `width`; the gutter is
    // padding inside it, not margin around it
    mouse_area(
        container(container(layers).width(Length::Fill).height(Length::Fixed(CARD_HEIGHT)))
            .width(Length::Fixed(width))
            .padding([0.0, CARD_GUTTER]),
    )
    .on_press(Message::CardClicked(card.url.clone()))
    .into()
}

/// Pick the handle to draw: the card's own image, then the shared
/// placeholder after a failure, then nothing (gradient only).
fn resolve_image<'a>(
    card: &DisplayCard,
    images: &'a ImageCache,
    placeholder_url: &str,
) -> Option<&'a image::Handle> {
    match images.state(&card.url) {
        Some(ImageState::Loaded(handle)) => Some(handle),
        Some(ImageState::Failed) => images.loaded(placeholder_url),
        _ => None,
    }
}
