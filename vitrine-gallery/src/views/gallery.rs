//! The carousel strip and its loading/empty fallbacks.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::GalleryState;
use crate::theme::{self, GalleryTheme};
use crate::views::cards;

/// Fixed height of the scrolling strip.
pub const STRIP_HEIGHT: f32 = 380.0;

/// Scrollable id used for programmatic strip positioning.
pub fn strip_id() -> scrollable::Id {
    scrollable::Id::new("vitrine-strip")
}

/// The full gallery section: heading, navigation, and the card strip.
pub fn view_gallery(state: &GalleryState) -> Element<'_, Message> {
    let nav_enabled = state.track.can_advance() && state.track.transition_enabled();

    let previous_button = nav_chevron("‹", nav_enabled.then_some(Message::PreviousRequested));
    let next_button = nav_chevron("›", nav_enabled.then_some(Message::NextRequested));

    let header = container(
        row![
            text("Media Gallery")
                .size(24)
                .color(GalleryTheme::TEXT_PRIMARY),
            Space::with_width(Length::Fill),
            row![previous_button, Space::with_width(5), next_button]
                .align_y(iced::Alignment::Center),
        ]
        .align_y(iced::Alignment::Center)
        .width(Length::Fill),
    )
    .padding([20, 20]);

    let card_width = state.card_width();
    let mut strip_row = row![];
    for card in state.strip.slots() {
        strip_row = strip_row.push(cards::media_card(
            card,
            &state.images,
            &state.config.placeholder_url,
            card_width,
        ));
    }

    // Positioning is driven from the update loop via `scroll_to`; the
    // scrollbar is hidden because the strip is not user-scrolled.
    let strip = scrollable(strip_row)
        .id(strip_id())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .width(Length::Fill)
        .height(Length::Fixed(STRIP_HEIGHT));

    column![header, strip].width(Length::Fill).into()
}

pub fn view_loading() -> Element<'static, Message> {
    section(
        column![
            text("Loading Gallery")
                .size(20)
                .color(GalleryTheme::TEXT_PRIMARY),
            Space::with_height(8),
            text("Please wait...")
                .size(14)
                .color(GalleryTheme::TEXT_SECONDARY),
        ]
        .align_x(iced::Alignment::Center)
        .into(),
    )
}

pub fn view_empty(error: Option<&str>) -> Element<'_, Message> {
    let mut content = column![
        text("No Images Available")
            .size(20)
            .color(GalleryTheme::TEXT_PRIMARY),
        Space::with_height(8),
        text("Images will appear here once added to the gallery.")
            .size(14)
            .color(GalleryTheme::TEXT_SECONDARY),
    ]
    .align_x(iced::Alignment::Center);

    if let Some(error) = error {
        content = content.push(Space::with_height(20));
        content = content.push(
            container(text(error).size(14))
                .style(theme::Container::ErrorBox.style())
                .padding([8, 14]),
        );
    }

    section(content.into())
}

fn section(content: Element<'_, Message>) -> Element<'_, Message> {
    column![
        container(
            text("Media Gallery")
                .size(24)
                .color(GalleryTheme::TEXT_PRIMARY)
        )
        .padding([20, 20]),
        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(STRIP_HEIGHT))
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center),
    ]
    .width(Length::Fill)
    .into()
}

fn nav_chevron(glyph: &str, on_press: Option<Message>) -> Element<'_, Message> {
    let mut chevron = button(text(glyph).size(20)).padding([4, 12]).style(theme::nav_button);
    if let Some(message) = on_press {
        chevron = chevron.on_press(message);
    }
    chevron.into()
}
