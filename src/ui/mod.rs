// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message`, and where it reports to the parent,
//! an `Event` returned from `update`.
//!
//! # Screens
//!
//! - [`pages`] - Home, Analysis, Visualizations, and Models
//! - [`lightbox`] - Modal dialog showing an enlarged plot
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Header and footer
//! - [`navbar`] - Tab row and compact drawer
//! - [`state`] - Sub-tab selection and viewport width
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon rendering

pub mod design_tokens;
pub mod icons;
pub mod layout;
pub mod lightbox;
pub mod navbar;
pub mod pages;
pub mod state;
pub mod styles;
pub mod theming;
