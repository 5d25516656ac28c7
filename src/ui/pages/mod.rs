// SPDX-License-Identifier: MPL-2.0
//! The four presentation pages.
//!
//! Pages share one message type and one state struct so the application can
//! reset every page-local selection in a single place when the route changes.

pub mod analysis;
mod common;
pub mod home;
pub mod models;
pub mod visualizations;

use crate::app::config::PresentationStyle;
use crate::app::screen::Screen;
use crate::content::{AssetPaths, CATEGORIES, MODELS};
use crate::i18n::fluent::I18n;
use crate::ui::lightbox::DialogPayload;
use crate::ui::state::TabSelection;
use iced::Element;

/// Contextual data needed to render a page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetPaths,
    pub state: &'a State,
    /// Window is narrower than the drawer breakpoint.
    pub compact: bool,
}

impl ViewContext<'_> {
    fn style(&self) -> PresentationStyle {
        self.assets.style()
    }
}

/// Page-local selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub category: TabSelection,
    pub model: TabSelection,
}

impl Default for State {
    fn default() -> Self {
        Self {
            category: TabSelection::new(CATEGORIES.len()),
            model: TabSelection::new(MODELS.len()),
        }
    }
}

impl State {
    pub fn reset(&mut self) {
        self.category.reset();
        self.model.reset();
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(&'static str),
    /// "Learn More" on the home hero.
    ShowFeatures,
    Expand(DialogPayload),
    SelectCategory(usize),
    SelectModel(usize),
    CopyLink(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Navigate(&'static str),
    ScrollToFeatures,
    OpenLightbox(DialogPayload),
    CopyLink(&'static str),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Navigate(path) => Event::Navigate(path),
        Message::ShowFeatures => Event::ScrollToFeatures,
        Message::Expand(payload) => Event::OpenLightbox(payload),
        Message::CopyLink(url) => Event::CopyLink(url),
        Message::SelectCategory(index) => {
            state.category.select(index);
            Event::None
        }
        Message::SelectModel(index) => {
            state.model.select(index);
            Event::None
        }
    }
}

/// Render the page for `screen`.
pub fn view<'a>(screen: Screen, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match screen {
        Screen::Home => home::view(ctx),
        Screen::Analysis => analysis::view(ctx),
        Screen::Visualizations => visualizations::view(ctx),
        Screen::Models => models::view(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn sub_tab_selection_is_clamped() {
        let mut state = State::default();
        update(Message::SelectCategory(99), &mut state);
        assert_eq!(state.category.index(), CATEGORIES.len() - 1);
        update(Message::SelectModel(1), &mut state);
        assert_eq!(state.model.index(), 1);
    }

    #[test]
    fn reset_returns_to_first_tabs() {
        let mut state = State::default();
        update(Message::SelectCategory(2), &mut state);
        update(Message::SelectModel(2), &mut state);
        state.reset();
        assert_eq!(state, State::default());
    }

    #[test]
    fn expand_is_forwarded_as_lightbox_event() {
        let mut state = State::default();
        let payload = DialogPayload {
            title: "Age Distribution".into(),
            description: "desc".into(),
            image: PathBuf::from("age_distribution.png"),
        };
        let event = update(Message::Expand(payload.clone()), &mut state);
        assert_eq!(event, Event::OpenLightbox(payload));
    }

    #[test]
    fn copy_link_is_forwarded_untouched() {
        let mut state = State::default();
        let url = crate::ui::layout::REPOSITORY_URL;
        assert_eq!(update(Message::CopyLink(url), &mut state), Event::CopyLink(url));
        assert_eq!(state, State::default());
    }

    #[test]
    fn every_page_renders_in_both_styles() {
        let i18n = I18n::default();
        let state = State::default();
        for style in [PresentationStyle::Styled, PresentationStyle::Plain] {
            let assets = AssetPaths::new("public", style);
            for compact in [false, true] {
                let ctx = ViewContext {
                    i18n: &i18n,
                    assets: &assets,
                    state: &state,
                    compact,
                };
                for screen in [
                    Screen::Home,
                    Screen::Analysis,
                    Screen::Visualizations,
                    Screen::Models,
                ] {
                    let _element = view(screen, &ctx);
                }
            }
        }
    }
}
