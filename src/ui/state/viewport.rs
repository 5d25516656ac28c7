// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the window width and decides between the inline tab row and the
//! compact drawer layout.

use crate::app::config::defaults::DEFAULT_DRAWER_BREAKPOINT;

/// Width of the window when it first opens, in logical pixels.
pub const INITIAL_WIDTH: f32 = 1200.0;

/// Initial window height, in logical pixels.
pub const INITIAL_HEIGHT: f32 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    width: f32,
    breakpoint: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(INITIAL_WIDTH, DEFAULT_DRAWER_BREAKPOINT)
    }
}

impl ViewportState {
    #[must_use]
    pub fn new(width: f32, breakpoint: f32) -> Self {
        Self { width, breakpoint }
    }

    /// True when the navigation collapses into a drawer.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.width < self.breakpoint
    }

    /// Records a new width. Returns true when the window just left the
    /// compact layout.
    pub fn resize(&mut self, width: f32) -> bool {
        let was_compact = self.is_compact();
        self.width = width;
        was_compact && !self.is_compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_is_wide() {
        assert!(!ViewportState::default().is_compact());
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let narrow = ViewportState::new(599.0, 600.0);
        let exact = ViewportState::new(600.0, 600.0);
        assert!(narrow.is_compact());
        assert!(!exact.is_compact());
    }

    #[test]
    fn resize_reports_leaving_compact_layout() {
        let mut viewport = ViewportState::new(400.0, 600.0);
        assert!(!viewport.resize(500.0));
        assert!(viewport.resize(800.0));
        assert!(!viewport.resize(900.0));
        assert!(!viewport.resize(300.0));
    }
}
