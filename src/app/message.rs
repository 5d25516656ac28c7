// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::config::PresentationStyle;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::pages;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(pages::Message),
    Lightbox(lightbox::Message),
    WindowResized(Size),
    /// Escape pressed and not captured by a widget.
    EscapePressed,
    /// Put a link on the system clipboard.
    CopyLink(&'static str),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Route opened at startup, e.g. `/models`.
    pub route: Option<String>,
    /// Directory containing `assets/` and `output/`.
    pub assets_dir: Option<String>,
    pub style: Option<PresentationStyle>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `CRAB_PRESENTATION_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
