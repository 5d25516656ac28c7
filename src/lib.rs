// SPDX-License-Identifier: MPL-2.0
//! `crab_presentation` presents the Crab Age Prediction project as a desktop
//! application built with the Iced GUI framework.
//!
//! It renders four static pages with tab or drawer navigation, enlarges
//! plots in a lightbox, and localizes its chrome with Fluent. The
//! [`tools`] module backs the `copy-assets` and `verify-deploy` utilities.

pub mod app;
pub mod content;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod logging;
pub mod tools;
pub mod ui;
