use iced::widget::{button, container};
use iced::{theme, Background, Border, Color, Degrees, Gradient, Shadow, Theme};

/// Dark gallery theme with high-contrast accents.
#[derive(Debug, Clone, Copy)]
pub struct GalleryTheme;

impl GalleryTheme {
    // Core colors
    pub const BLACK: Color = Color::from_rgb(0.04, 0.04, 0.05);
    pub const ACCENT: Color = Color::from_rgb(1.0, 0.106, 0.42); // #FF1B6B

    // Grays
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5);

    // Status colors
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2);

    // Lightbox backdrop: near-opaque black
    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.9);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BLACK;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;
        palette.danger = Self::ERROR;

        Theme::custom("Vitrine".to_string(), palette)
    }
}

/// Decorative card gradients, assigned to cards by collection position.
pub const GRADIENTS: [(Color, Color); 8] = [
    (
        Color::from_rgb(1.0, 0.106, 0.42),   // #FF1B6B
        Color::from_rgb(0.271, 0.792, 1.0),  // #45CAFF
    ),
    (
        Color::from_rgb(1.0, 0.42, 0.0),     // #FF6B00
        Color::from_rgb(1.0, 0.09, 0.267),   // #FF1744
    ),
    (
        Color::from_rgb(0.4, 0.494, 0.918),  // #667EEA
        Color::from_rgb(0.463, 0.294, 0.635), // #764BA2
    ),
    (
        Color::from_rgb(0.898, 0.906, 0.922), // #E5E7EB
        Color::from_rgb(0.953, 0.957, 0.965), // #F3F4F6
    ),
    (
        Color::from_rgb(1.0, 0.106, 0.42),   // #FF1B6B
        Color::from_rgb(1.0, 0.42, 0.616),   // #FF6B9D
    ),
    (
        Color::from_rgb(0.0, 0.788, 1.0),    // #00C9FF
        Color::from_rgb(0.573, 0.996, 0.616), // #92FE9D
    ),
    (
        Color::from_rgb(0.988, 0.275, 0.42), // #FC466B
        Color::from_rgb(0.247, 0.369, 0.984), // #3F5EFB
    ),
    (
        Color::from_rgb(0.992, 0.733, 0.176), // #FDBB2D
        Color::from_rgb(0.133, 0.757, 0.765), // #22C1C3
    ),
];

/// Resolve a card's palette index into a diagonal gradient background.
pub fn card_gradient(index: usize) -> Background {
    let (start, end) = GRADIENTS[index % GRADIENTS.len()];
    let gradient = iced::gradient::Linear::new(Degrees(135.0))
        .add_stop(0.0, start)
        .add_stop(1.0, end);
    Background::Gradient(Gradient::Linear(gradient))
}

// Container styles using closures
pub enum Container {
    Card,
    Caption,
    Modal,
    ModalOverlay,
    ErrorBox,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(GalleryTheme::TEXT_PRIMARY),
                background: Some(Background::Color(GalleryTheme::CARD_BG)),
                border: Border {
                    color: GalleryTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
            },
            Container::Caption => |_| container::Style {
                text_color: Some(GalleryTheme::TEXT_PRIMARY),
                background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.55))),
                border: Border {
                    radius: 8.0.into(),
                    ..Border::default()
                },
                shadow: Shadow::default(),
            },
            Container::Modal => |_| container::Style {
                text_color: Some(GalleryTheme::TEXT_PRIMARY),
                background: None,
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::ModalOverlay => |_| container::Style {
                text_color: Some(GalleryTheme::TEXT_PRIMARY),
                background: Some(Background::Color(GalleryTheme::BACKDROP)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::ErrorBox => |_| container::Style {
                text_color: Some(GalleryTheme::ERROR),
                background: Some(Background::Color(GalleryTheme::CARD_BG)),
                border: Border {
                    color: GalleryTheme::ERROR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

/// Chevron-style navigation button.
pub fn nav_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            text_color: GalleryTheme::TEXT_PRIMARY,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: GalleryTheme::TEXT_DIMMED,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
        _ => button::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            text_color: GalleryTheme::TEXT_PRIMARY,
            border: Border {
                radius: 6.0.into(),
                ..Border::default()
            },
            ..button::Style::default()
        },
    }
}

/// Translucent round close button for the lightbox.
pub fn close_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = if matches!(status, button::Status::Hovered) {
        0.3
    } else {
        0.2
    };
    button::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, alpha))),
        text_color: GalleryTheme::TEXT_PRIMARY,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
