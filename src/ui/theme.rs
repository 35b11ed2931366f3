//! Color palette and widget styles

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// ============================================================================
// Progress bar defaults
// ============================================================================

/// Track color when none is configured
pub const DEFAULT_TRACK: Color = color!(0x000000);
/// Fill color when none is configured
pub const DEFAULT_FILL: Color = color!(0xffffff);

// ============================================================================
// Demo window palette
// ============================================================================

pub const BACKGROUND: Color = color!(0x121212);
pub const SURFACE: Color = color!(0x1a1a1a);
pub const SURFACE_LIGHT: Color = color!(0x333333);
pub const TEXT_PRIMARY: Color = color!(0xffffff);
pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
pub const ACCENT_PINK: Color = color!(0xff2d7a);

/// Window background container
pub fn page_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

/// Rounded card holding the progress bar
pub fn card_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(SURFACE)),
        border: Border {
            radius: 12.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Pill-shaped action button
pub fn pill_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(SURFACE_LIGHT)),
        text_color: TEXT_PRIMARY,
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(ACCENT_PINK)),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(SURFACE)),
            text_color: TEXT_SECONDARY,
            ..base
        },
        _ => base,
    }
}
