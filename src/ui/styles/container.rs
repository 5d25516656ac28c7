// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White header bar with a soft bottom shadow.
pub fn app_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Strip holding the navigation tabs, separated by a divider line.
pub fn nav_strip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Footer band.
pub fn footer(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Card surface used for plots, features, and findings.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Paper surface behind tab panels and tables.
pub fn paper(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Background behind plot images inside cards.
pub fn image_well(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dark hero banner with the 50% black veil baked into the color.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Primary-colored bar, used for dialog headers and table heads.
pub fn brand_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.palette().primary)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Row tint for the best model in the comparison table.
pub fn highlighted_row(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.05,
            ..theme.palette().primary
        })),
        ..Default::default()
    }
}

/// Zebra stripe for odd table rows.
pub fn striped_row(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.02,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Short secondary-colored bar under section titles.
pub fn accent_divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SECONDARY)),
        ..Default::default()
    }
}

/// Underline of the selected tab.
pub fn tab_indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::SECONDARY)),
        ..Default::default()
    }
}

/// Dimmed layer behind dialogs and the drawer.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Dialog and drawer surface.
pub fn sheet(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::CARD_HOVER,
        ..Default::default()
    }
}
