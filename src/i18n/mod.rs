// SPDX-License-Identifier: MPL-2.0
//! Localization of the application chrome with Fluent.
//!
//! Navigation labels, headings, buttons, and the footer are translated. The
//! page datasets (plot captions, model descriptions) stay in English.
//!
//! The locale is chosen from the `--lang` flag, then `[general] language`,
//! then the OS locale, and finally `en-US`. Keys missing from the active
//! bundle fall back to the `en-US` bundle.

pub mod fluent;

pub use fluent::I18n;
