// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded crab SVG at runtime to produce an RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/crab.svg");

/// Edge length of the rasterized icon, in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to an `ICON_SIZE` square RGBA buffer.
#[must_use]
pub fn rasterize(size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()).ok()?;

    let orig_size = tree.size();
    let scale_x = size as f32 / orig_size.width();
    let scale_y = size as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}

/// Window icon built from [`rasterize`].
#[must_use]
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixmap.data().to_vec(), ICON_SIZE, ICON_SIZE).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_svg_rasterizes() {
        let pixmap = rasterize(32).expect("crab svg should render");
        assert_eq!(pixmap.width(), 32);
        assert_eq!(pixmap.height(), 32);
        assert!(pixmap.data().iter().any(|&byte| byte != 0));
    }

    #[test]
    fn zero_size_yields_none() {
        assert!(rasterize(0).is_none());
    }
}
