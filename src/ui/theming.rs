// SPDX-License-Identifier: MPL-2.0
//! Theme selection: light/dark mode and the styled/plain renditions.

use crate::app::config::PresentationStyle;
use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color roles used by the page widgets.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub paper: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_primary_dark: Color,
    pub brand_secondary: Color,

    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::BACKGROUND,
            paper: palette::PAPER,
            text_primary: palette::TEXT_PRIMARY,
            text_secondary: palette::TEXT_SECONDARY,
            brand_primary: palette::PRIMARY,
            brand_primary_dark: palette::PRIMARY_DARK,
            brand_secondary: palette::SECONDARY,
            accent: palette::INFO,
        }
    }

    /// Dark surfaces keep the brand hues but use the light shades for contrast.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            paper: palette::GRAY_800,
            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_400,
            brand_primary: palette::PRIMARY_LIGHT,
            brand_primary_dark: palette::PRIMARY,
            brand_secondary: palette::SECONDARY_LIGHT,
            accent: palette::INFO,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

/// Builds the iced theme for a mode and rendition.
///
/// The plain rendition uses the stock iced themes; the styled one swaps in
/// the brand palette.
#[must_use]
pub fn iced_theme(mode: ThemeMode, style: PresentationStyle) -> Theme {
    let dark = mode.is_dark();
    match style {
        PresentationStyle::Plain => {
            if dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
        PresentationStyle::Styled => {
            let scheme = if dark {
                ColorScheme::dark()
            } else {
                ColorScheme::light()
            };
            let base = if dark { Palette::DARK } else { Palette::LIGHT };
            let name = if dark { "SMU Dark" } else { "SMU Light" };
            Theme::custom(
                name.to_string(),
                Palette {
                    background: scheme.surface,
                    text: scheme.text_primary,
                    primary: scheme.brand_primary,
                    danger: scheme.brand_secondary,
                    ..base
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface.r < 0.2);
    }

    #[test]
    fn both_schemes_keep_brand_hue() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn styled_theme_uses_brand_primary() {
        let theme = iced_theme(ThemeMode::Light, PresentationStyle::Styled);
        assert_eq!(theme.palette().primary, palette::PRIMARY);
    }

    #[test]
    fn plain_theme_is_stock() {
        assert_eq!(
            iced_theme(ThemeMode::Light, PresentationStyle::Plain),
            Theme::Light
        );
        assert_eq!(
            iced_theme(ThemeMode::Dark, PresentationStyle::Plain),
            Theme::Dark
        );
    }
}
