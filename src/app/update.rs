// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Components report what happened through their `Event` enums; this module
//! turns those events into route changes, lightbox state, and scroll tasks.

use super::{screen, App, Message, PAGE_SCROLL_ID};
use crate::ui::design_tokens::spacing;
use crate::ui::lightbox::DialogPayload;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::pages::{self, home, Event as PageEvent};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::Task;

impl App {
    /// Replaces the current route. Page-local selections and the lightbox
    /// are reset and the page scrolls back to the top.
    pub fn navigate(&mut self, path: &str) -> Task<Message> {
        let normalized = screen::normalize_path(path);
        tracing::debug!("Navigating from {} to {}", self.current_path, normalized);

        self.current_path = normalized;
        self.drawer_open = false;
        self.lightbox.close();
        self.pages.reset();

        operation::snap_to(Id::new(PAGE_SCROLL_ID), RelativeOffset { x: 0.0, y: 0.0 })
    }

    pub(super) fn handle_navbar_message(&mut self, message: navbar::Message) -> Task<Message> {
        match navbar::update(message, &mut self.drawer_open) {
            NavbarEvent::None => Task::none(),
            NavbarEvent::Navigate(path) => self.navigate(path),
        }
    }

    pub(super) fn handle_page_message(&mut self, message: pages::Message) -> Task<Message> {
        match pages::update(message, &mut self.pages) {
            PageEvent::None => Task::none(),
            PageEvent::Navigate(path) => self.navigate(path),
            PageEvent::ScrollToFeatures => operation::scroll_to(
                Id::new(PAGE_SCROLL_ID),
                AbsoluteOffset {
                    x: 0.0,
                    y: home::FEATURES_OFFSET + spacing::XL,
                },
            ),
            PageEvent::OpenLightbox(payload) => {
                self.open_lightbox(payload);
                Task::none()
            }
            PageEvent::CopyLink(url) => Self::copy_link(url),
        }
    }

    pub(super) fn copy_link(url: &'static str) -> Task<Message> {
        tracing::info!("Copied {url} to the clipboard");
        iced::clipboard::write(url.to_owned())
    }

    /// The plain rendition has no dialog.
    fn open_lightbox(&mut self, payload: DialogPayload) {
        if self.style().is_styled() {
            self.lightbox.open(payload);
        } else {
            tracing::debug!("Ignoring lightbox request in plain presentation");
        }
    }

    pub(super) fn handle_resize(&mut self, width: f32) {
        if self.viewport.resize(width) {
            self.drawer_open = false;
        }
    }

    /// Escape dismisses the topmost layer.
    pub(super) fn handle_escape(&mut self) {
        if self.lightbox.is_open() {
            self.lightbox.close();
        } else {
            self.drawer_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{Config, PresentationStyle};
    use crate::app::{Flags, Screen};
    use crate::ui::lightbox;
    use iced::Size;
    use std::path::PathBuf;

    fn app_with(style: PresentationStyle) -> App {
        let flags = Flags {
            style: Some(style),
            ..Flags::default()
        };
        App::with_config(flags, &Config::default()).0
    }

    fn payload(title: &str) -> DialogPayload {
        DialogPayload {
            title: title.to_string(),
            description: format!("{title} description"),
            image: PathBuf::from(format!("{title}.png")),
        }
    }

    #[test]
    fn starts_on_home_by_default() {
        let app = app_with(PresentationStyle::Styled);
        assert_eq!(app.current_path(), "/");
        assert_eq!(app.screen(), Screen::Home);
    }

    #[test]
    fn start_route_flag_wins_over_config() {
        let mut config = Config::default();
        config.general.start_route = Some("/analysis".into());
        let flags = Flags {
            route: Some("models/xgboost".into()),
            ..Flags::default()
        };
        let (app, _) = App::with_config(flags, &config);
        assert_eq!(app.current_path(), "/models");
    }

    #[test]
    fn navbar_navigation_updates_path() {
        let mut app = app_with(PresentationStyle::Styled);
        let _ = app.update(Message::Navbar(navbar::Message::Navigate("/visualizations")));
        assert_eq!(app.screen(), Screen::Visualizations);
    }

    #[test]
    fn drawer_selection_navigates_and_closes() {
        let mut app = app_with(PresentationStyle::Styled);
        app.handle_resize(500.0);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleDrawer));
        assert!(app.is_drawer_open());

        let _ = app.update(Message::Navbar(navbar::Message::Navigate("/models")));
        assert!(!app.is_drawer_open());
        assert_eq!(app.screen(), Screen::Models);
    }

    #[test]
    fn widening_past_breakpoint_closes_drawer() {
        let mut app = app_with(PresentationStyle::Styled);
        let _ = app.update(Message::WindowResized(Size::new(480.0, 700.0)));
        assert!(app.is_compact());
        let _ = app.update(Message::Navbar(navbar::Message::ToggleDrawer));

        let _ = app.update(Message::WindowResized(Size::new(900.0, 700.0)));
        assert!(!app.is_compact());
        assert!(!app.is_drawer_open());
    }

    #[test]
    fn second_lightbox_replaces_first() {
        let mut app = app_with(PresentationStyle::Styled);
        let _ = app.update(Message::Page(pages::Message::Expand(payload("first"))));
        let _ = app.update(Message::Page(pages::Message::Expand(payload("second"))));
        assert_eq!(
            app.lightbox().payload().map(|p| p.title.as_str()),
            Some("second")
        );

        let _ = app.update(Message::Lightbox(lightbox::Message::Close));
        assert!(!app.lightbox().is_open());
    }

    #[test]
    fn plain_presentation_has_no_lightbox() {
        let mut app = app_with(PresentationStyle::Plain);
        let _ = app.update(Message::Page(pages::Message::Expand(payload("plot"))));
        assert!(!app.lightbox().is_open());
    }

    #[test]
    fn navigation_resets_page_state_and_lightbox() {
        let mut app = app_with(PresentationStyle::Styled);
        let _ = app.navigate("/visualizations");
        let _ = app.update(Message::Page(pages::Message::SelectCategory(2)));
        let _ = app.update(Message::Page(pages::Message::Expand(payload("plot"))));

        let _ = app.update(Message::Page(pages::Message::Navigate("/")));
        assert_eq!(app.pages().category.index(), 0);
        assert!(!app.lightbox().is_open());
    }

    #[test]
    fn escape_closes_lightbox_before_drawer() {
        let mut app = app_with(PresentationStyle::Styled);
        app.handle_resize(400.0);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleDrawer));
        let _ = app.update(Message::Page(pages::Message::Expand(payload("plot"))));

        let _ = app.update(Message::EscapePressed);
        assert!(!app.lightbox().is_open());
        assert!(app.is_drawer_open());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.is_drawer_open());
    }

    #[test]
    fn copy_link_keeps_state_untouched() {
        let mut app = app_with(PresentationStyle::Styled);
        let _ = app.navigate("/models");
        let _ = app.update(Message::Page(pages::Message::SelectModel(1)));

        let _ = app.update(Message::CopyLink(crate::ui::layout::REPOSITORY_URL));
        let _ = app.update(Message::Page(pages::Message::CopyLink(
            crate::ui::layout::REPOSITORY_URL,
        )));
        assert_eq!(app.current_path(), "/models");
        assert_eq!(app.pages().model.index(), 1);
        assert!(!app.lightbox().is_open());
    }

    #[test]
    fn learn_more_keeps_the_route() {
        let mut app = app_with(PresentationStyle::Styled);
        let _ = app.update(Message::Page(pages::Message::ShowFeatures));
        assert_eq!(app.current_path(), "/");
    }
}
