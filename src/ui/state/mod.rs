// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Selection and layout state kept apart from the main App struct so the
//! transitions can be tested without a window.

pub mod tabs;
pub mod viewport;

pub use tabs::TabSelection;
pub use viewport::ViewportState;
