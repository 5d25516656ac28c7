// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the navigation and card glyphs.
//!
//! Glyphs are single-path SVGs on a 24x24 grid, wrapped into a document at
//! first use. Handles are cached in a `OnceLock` so each glyph is parsed
//! once per process.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Glyph};
//!
//! let menu = button(icons::themed(Glyph::Menu, sizing::ICON_MD));
//! let zoom = icons::colored(Glyph::ZoomOutMap, sizing::ICON_SM, palette::PRIMARY);
//! ```
//!
//! # Naming Convention
//!
//! Glyphs use visual names describing the icon's appearance, not the page
//! they happen to decorate (e.g., `BarChart` not `Visualizations`).

use iced::widget::svg::{self, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Home,
    Insights,
    BarChart,
    Psychology,
    Menu,
    Close,
    ZoomOutMap,
    Info,
    Link,
    School,
    Timeline,
    Assessment,
}

impl Glyph {
    pub const ALL: [Glyph; 12] = [
        Glyph::Home,
        Glyph::Insights,
        Glyph::BarChart,
        Glyph::Psychology,
        Glyph::Menu,
        Glyph::Close,
        Glyph::ZoomOutMap,
        Glyph::Info,
        Glyph::Link,
        Glyph::School,
        Glyph::Timeline,
        Glyph::Assessment,
    ];

    /// SVG path data on a 24x24 grid.
    #[must_use]
    pub fn path_data(self) -> &'static str {
        match self {
            Glyph::Home => "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z",
            Glyph::Insights => "M3 17l6-6 4 4 8-8v3h2V3h-7v2h3l-6 6-4-4-7 7z",
            Glyph::BarChart => "M5 9.2h3V19H5zM10.6 5h2.8v14h-2.8zm5.6 8H19v6h-2.8z",
            Glyph::Psychology => {
                "M12 2a7 7 0 0 0-7 7c0 2.4 1.2 4.5 3 5.7V17a1 1 0 0 0 1 1h6a1 1 0 0 0 1-1v-2.3c1.8-1.3 3-3.4 3-5.7a7 7 0 0 0-7-7zM9 21a1 1 0 0 0 1 1h4a1 1 0 0 0 1-1v-1H9z"
            }
            Glyph::Menu => "M3 18h18v-2H3zm0-5h18v-2H3zm0-7v2h18V6z",
            Glyph::Close => {
                "M19 6.41 17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"
            }
            Glyph::ZoomOutMap => {
                "M15 3l2.3 2.3-2.89 2.87 1.42 1.42L18.7 6.7 21 9V3zM3 9l2.3-2.3 2.87 2.89 1.42-1.42L6.7 5.3 9 3H3zm6 12-2.3-2.3 2.89-2.87-1.42-1.42L5.3 17.3 3 15v6zm12-6-2.3 2.3-2.87-2.89-1.42 1.42 2.89 2.87L15 21h6z"
            }
            Glyph::Info => {
                "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-6h2zm0-8h-2V7h2z"
            }
            Glyph::Link => {
                "M3.9 12c0-1.71 1.39-3.1 3.1-3.1h4V7H7c-2.76 0-5 2.24-5 5s2.24 5 5 5h4v-1.9H7c-1.71 0-3.1-1.39-3.1-3.1zM8 13h8v-2H8zm9-6h-4v1.9h4c1.71 0 3.1 1.39 3.1 3.1s-1.39 3.1-3.1 3.1h-4V17h4c2.76 0 5-2.24 5-5s-2.24-5-5-5z"
            }
            Glyph::School => "M5 13.18v4L12 21l7-3.82v-4L12 17zM12 3 1 9l11 6 9-4.91V17h2V9z",
            Glyph::Timeline => {
                "M23 8c0 1.1-.9 2-2 2-.18 0-.35-.02-.51-.07l-3.56 3.55c.05.16.07.34.07.52 0 1.1-.9 2-2 2s-2-.9-2-2c0-.18.02-.36.07-.52l-2.55-2.55c-.16.05-.34.07-.52.07s-.36-.02-.52-.07l-4.55 4.56c.05.16.07.33.07.51 0 1.1-.9 2-2 2s-2-.9-2-2 .9-2 2-2c.18 0 .35.02.51.07l4.56-4.55C8.02 9.36 8 9.18 8 9c0-1.1.9-2 2-2s2 .9 2 2c0 .18-.02.36-.07.52l2.55 2.55c.16-.05.34-.07.52-.07s.36.02.52.07l3.55-3.56C19.02 8.35 19 8.18 19 8c0-1.1.9-2 2-2s2 .9 2 2z"
            }
            Glyph::Assessment => {
                "M19 3H5c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zM9 17H7v-7h2zm4 0h-2V7h2zm4 0h-2v-4h2z"
            }
        }
    }

    /// Complete SVG document for this glyph.
    #[must_use]
    pub fn document(self) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="{}"/></svg>"#,
            self.path_data()
        )
    }

    /// Cached handle for this glyph.
    #[must_use]
    pub fn handle(self) -> svg::Handle {
        static HANDLES: OnceLock<Vec<svg::Handle>> = OnceLock::new();
        let handles = HANDLES.get_or_init(|| {
            Glyph::ALL
                .iter()
                .map(|glyph| svg::Handle::from_memory(glyph.document().into_bytes()))
                .collect()
        });
        handles[self as usize].clone()
    }
}

fn sized<'a>(glyph: Glyph, size: f32) -> Svg<'a> {
    Svg::new(glyph.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}

/// Glyph tinted with the theme's text color.
pub fn themed<'a>(glyph: Glyph, size: f32) -> Svg<'a> {
    sized(glyph, size).style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}

/// Glyph tinted with the theme's primary color.
pub fn brand<'a>(glyph: Glyph, size: f32) -> Svg<'a> {
    sized(glyph, size).style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().primary),
    })
}

/// Glyph tinted with a fixed color.
pub fn colored<'a>(glyph: Glyph, size: f32, color: Color) -> Svg<'a> {
    sized(glyph, size).style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_glyph_in_discriminant_order() {
        for (index, glyph) in Glyph::ALL.iter().enumerate() {
            assert_eq!(*glyph as usize, index);
        }
    }

    #[test]
    fn documents_are_well_formed_svg() {
        for glyph in Glyph::ALL {
            let doc = glyph.document();
            let tree = resvg::usvg::Tree::from_data(doc.as_bytes(), &Default::default());
            assert!(tree.is_ok(), "{glyph:?} failed to parse");
        }
    }

    #[test]
    fn handles_are_cached() {
        assert_eq!(Glyph::Menu.handle().id(), Glyph::Menu.handle().id());
        assert_ne!(Glyph::Menu.handle().id(), Glyph::Close.handle().id());
    }
}
