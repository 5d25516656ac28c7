// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between navigation, pages, and
//! the lightbox.
//!
//! The `App` struct owns the current route path, the window width, and the
//! page-local selections, and translates component events into route
//! changes and scroll tasks. Policy decisions (drawer breakpoint, which
//! rendition gets a lightbox) live next to the update loop.

pub mod config;
mod message;
pub mod paths;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::content::AssetPaths;
use crate::i18n::fluent::I18n;
use crate::ui::lightbox;
use crate::ui::pages;
use crate::ui::state::viewport::{ViewportState, INITIAL_HEIGHT, INITIAL_WIDTH};
use crate::ui::theming::{self, ThemeMode};
use config::{Config, PresentationStyle};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Identifier of the scrollable wrapping the page content.
pub const PAGE_SCROLL_ID: &str = "page-scroll";

pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Route path; the selected navigation entry is derived from it.
    current_path: String,
    viewport: ViewportState,
    drawer_open: bool,
    lightbox: lightbox::State,
    pages: pages::State,
    theme_mode: ThemeMode,
    assets: AssetPaths,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_path", &self.current_path)
            .field("compact", &self.viewport.is_compact())
            .field("drawer_open", &self.drawer_open)
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(INITIAL_WIDTH, INITIAL_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires `Fn` for boot; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        if let Some(key) = warning {
            tracing::warn!("{}", I18n::default().tr(&key));
        }
        Self::with_config(flags, &config)
    }

    /// Builds the initial state from already-loaded settings. CLI flags win
    /// over the config file.
    pub fn with_config(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);

        let style = flags
            .style
            .or(config.presentation.style)
            .unwrap_or_default();
        let assets_root = flags
            .assets_dir
            .map_or_else(|| config.presentation.assets_dir(), Into::into);
        let start = flags
            .route
            .or_else(|| config.general.start_route.clone())
            .unwrap_or_else(|| config::DEFAULT_START_ROUTE.to_string());

        let app = Self {
            i18n,
            current_path: screen::normalize_path(&start),
            viewport: ViewportState::new(INITIAL_WIDTH, config.presentation.drawer_breakpoint()),
            drawer_open: false,
            lightbox: lightbox::State::default(),
            pages: pages::State::default(),
            theme_mode: config.general.theme_mode,
            assets: AssetPaths::new(assets_root, style),
        };

        tracing::info!(
            "Opening {} ({:?} presentation, assets in {})",
            app.current_path,
            style,
            app.assets.root().display()
        );

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.theme_mode, self.style())
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => self.handle_navbar_message(message),
            Message::Page(message) => self.handle_page_message(message),
            Message::Lightbox(message) => {
                lightbox::update(message, &mut self.lightbox);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.handle_resize(size.width);
                Task::none()
            }
            Message::EscapePressed => {
                self.handle_escape();
                Task::none()
            }
            Message::CopyLink(url) => Self::copy_link(url),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            current_path: &self.current_path,
            compact: self.viewport.is_compact(),
            drawer_open: self.drawer_open,
            lightbox: &self.lightbox,
            pages: &self.pages,
            assets: &self.assets,
        })
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        Screen::from_path(&self.current_path)
    }

    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }

    #[must_use]
    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    #[must_use]
    pub fn lightbox(&self) -> &lightbox::State {
        &self.lightbox
    }

    #[must_use]
    pub fn pages(&self) -> &pages::State {
        &self.pages
    }

    #[must_use]
    pub fn style(&self) -> PresentationStyle {
        self.assets.style()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_localized() {
        let (app, _) = App::with_config(Flags::default(), &Config::default());
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn assets_dir_flag_overrides_config() {
        let flags = Flags {
            assets_dir: Some("/srv/crab".into()),
            style: Some(PresentationStyle::Plain),
            ..Flags::default()
        };
        let (app, _) = App::with_config(flags, &Config::default());
        assert_eq!(app.assets.root(), std::path::Path::new("/srv/crab"));
        assert_eq!(app.style(), PresentationStyle::Plain);
    }

    #[test]
    fn view_renders_with_overlays() {
        let (mut app, _) = App::with_config(Flags::default(), &Config::default());
        let _ = app.update(Message::WindowResized(iced::Size::new(400.0, 800.0)));
        let _ = app.update(Message::Navbar(crate::ui::navbar::Message::ToggleDrawer));
        let _element = app.view();
    }
}
