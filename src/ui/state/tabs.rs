// SPDX-License-Identifier: MPL-2.0
//! Sub-tab selection for pages with tabbed panels.

/// Selected index into a fixed-length list of tabs.
///
/// The index always stays within `[0, len)`; out-of-range selections are
/// clamped to the last tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    index: usize,
    len: usize,
}

impl TabSelection {
    /// # Panics
    ///
    /// Panics if `len` is zero; every tab strip has at least one tab.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        assert!(len > 0, "a tab strip needs at least one tab");
        Self { index: 0, len }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn select(&mut self, index: usize) {
        self.index = index.min(self.len - 1);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}
