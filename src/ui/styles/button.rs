// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled primary button ("contained" variant). Flat until hovered.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(brand)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_DARK)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_400)),
            text_color: palette::GRAY_700,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Outlined button in the brand color.
pub fn outlined(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::TINT,
            ..brand
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: brand,
        border: Border {
            color: brand,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined button drawn over the dark hero banner.
pub fn on_dark(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.2,
        _ => 0.1,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            color: palette::SECONDARY,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button, e.g. "View Larger".
pub fn text_link(theme: &Theme, status: button::Status) -> button::Style {
    let brand = theme.palette().primary;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::TINT,
            ..brand
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: brand,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent zoom button laid over card images.
pub fn zoom_overlay(theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => (0.9, palette::SECONDARY),
        _ => (opacity::OVERLAY_STRONG, theme.palette().primary),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Tab label. The selected tab is bold in the brand color; the indicator
/// underline is drawn by the caller.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ext = theme.extended_palette();
        let brand = theme.palette().primary;
        let text_color = if selected || matches!(status, button::Status::Hovered) {
            brand
        } else {
            ext.background.base.text
        };

        button::Style {
            background: None,
            text_color: if matches!(status, button::Status::Hovered) && !selected {
                Color { a: 0.9, ..text_color }
            } else {
                text_color
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Drawer list entry; selected entries get a faint brand tint.
pub fn drawer_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let brand = theme.palette().primary;
        let tint = match (selected, status) {
            (true, button::Status::Hovered) => Some(opacity::TINT_HOVER),
            (true, _) => Some(opacity::TINT),
            (false, button::Status::Hovered | button::Status::Pressed) => Some(opacity::TINT),
            (false, _) => None,
        };

        button::Style {
            background: tint.map(|a| Background::Color(Color { a, ..brand })),
            text_color: if selected {
                brand
            } else {
                theme.extended_palette().background.base.text
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Icon button on the primary-colored dialog header.
pub fn dialog_close(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(Color {
                    a: opacity::TINT_HOVER,
                    ..palette::WHITE
                }))
            }
            _ => None,
        },
        text_color: palette::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
