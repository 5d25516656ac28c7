// SPDX-License-Identifier: MPL-2.0
//! Text color roles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::{Color, Theme};

/// Headings in the brand color.
pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().primary),
    }
}

/// Darker brand shade for sub-headings on light surfaces.
pub fn brand_dark(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().primary.strong.color),
    }
}

/// Secondary copy such as card descriptions and captions.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(Color {
            a: 0.75,
            ..theme.palette().text
        }),
    }
}

/// Copy laid over the dark hero banner.
pub fn on_dark(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muted_is_translucent_body_color() {
        let theme = Theme::Light;
        let color = muted(&theme).color.expect("color is set");
        assert!(color.a < 1.0);
    }
}
