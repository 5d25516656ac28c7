// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants of the presentation, following the W3C Design Tokens layout
and the SMU brand palette.

## Organization

- **Palette**: Brand and neutral colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Heading and body scale (16px base)
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use crab_presentation::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.129, 0.129, 0.129);
    pub const GRAY_800: Color = Color::from_rgb(0.259, 0.259, 0.259);
    pub const GRAY_700: Color = Color::from_rgb(0.38, 0.38, 0.38);
    pub const GRAY_400: Color = Color::from_rgb(0.741, 0.741, 0.741);
    pub const GRAY_200: Color = Color::from_rgb(0.933, 0.933, 0.933);
    pub const GRAY_100: Color = Color::from_rgb(0.961, 0.961, 0.961);

    // SMU Blue
    pub const PRIMARY_LIGHT: Color = Color::from_rgb(0.353, 0.427, 0.722); // #5a6db8
    pub const PRIMARY: Color = Color::from_rgb(0.208, 0.298, 0.631); // #354CA1
    pub const PRIMARY_DARK: Color = Color::from_rgb(0.145, 0.208, 0.443); // #253571

    // SMU Red
    pub const SECONDARY_LIGHT: Color = Color::from_rgb(0.82, 0.247, 0.337); // #d13f56
    pub const SECONDARY: Color = Color::from_rgb(0.784, 0.063, 0.18); // #C8102E
    pub const SECONDARY_DARK: Color = Color::from_rgb(0.549, 0.043, 0.125); // #8c0b20

    // Surfaces and text
    pub const BACKGROUND: Color = WHITE;
    pub const PAPER: Color = GRAY_100; // #f5f5f5
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.4, 0.4, 0.4); // #666666

    // Accent for visualizations
    pub const INFO: Color = Color::from_rgb(0.353, 0.706, 0.675); // #5ab4ac
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const TINT: f32 = 0.08;
    pub const TINT_HOVER: f32 = 0.12;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 64.0; // 8 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 35.0;

    // Header / navigation
    pub const LOGO_HEIGHT: f32 = 40.0;
    pub const FOOTER_LOGO_HEIGHT: f32 = 30.0;
    pub const NAV_TAB_HEIGHT: f32 = 64.0;
    pub const DRAWER_WIDTH: f32 = 250.0;

    // Page content
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
    pub const TEXT_MAX_WIDTH: f32 = 800.0;
    pub const HERO_HEIGHT: f32 = 400.0;
    pub const ANALYSIS_IMAGE_HEIGHT: f32 = 200.0;
    pub const VISUALIZATION_IMAGE_HEIGHT: f32 = 250.0;
    pub const MODEL_PLOT_HEIGHT: f32 = 360.0;
    pub const HIGHLIGHT_IMAGE_HEIGHT: f32 = 280.0;
    pub const DIVIDER_LONG: f32 = 80.0;
    pub const DIVIDER_SHORT: f32 = 60.0;

    // Lightbox
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1200.0;
    pub const LIGHTBOX_IMAGE_HEIGHT: f32 = 560.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Sizes follow the rem scale of the web theme with a 16px root.

    /// h1 - 2.5rem
    pub const H1: f32 = 40.0;

    /// h2 - 2rem, hero title
    pub const H2: f32 = 32.0;

    /// h3 - 1.75rem, page titles
    pub const H3: f32 = 28.0;

    /// h4 - 1.5rem, section titles
    pub const H4: f32 = 24.0;

    /// h5 - 1.25rem
    pub const H5: f32 = 20.0;

    /// h6 - 1rem, card titles
    pub const H6: f32 = 16.0;

    /// body1 - 1rem
    pub const BODY1: f32 = 16.0;

    /// body2 - 0.875rem
    pub const BODY2: f32 = 14.0;

    /// Tab labels - 0.95rem
    pub const TAB: f32 = 15.2;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Tab indicator underline.
    pub const INDICATOR: f32 = 3.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// App bar and buttons: 0 2px 4px rgba(0,0,0,0.1)
    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Cards: 0 4px 8px rgba(0,0,0,0.05)
    pub const CARD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Hovered cards: 0 8px 16px rgba(0,0,0,0.1)
    pub const CARD_HOVER: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TINT < opacity::TINT_HOVER);

    assert!(typography::H1 > typography::H2);
    assert!(typography::H2 > typography::H3);
    assert!(typography::H3 > typography::H4);
    assert!(typography::H4 > typography::H5);
    assert!(typography::H5 > typography::H6);
    assert!(typography::BODY1 > typography::BODY2);

    assert!(sizing::VISUALIZATION_IMAGE_HEIGHT > sizing::ANALYSIS_IMAGE_HEIGHT);
    assert!(sizing::DIVIDER_LONG > sizing::DIVIDER_SHORT);
};
