// SPDX-License-Identifier: MPL-2.0
//! Modal dialog showing an enlarged plot with its caption.
//!
//! At most one dialog is open. Opening while another is shown replaces the
//! payload in a single assignment, so title, image, and caption never mix.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{
    button, center, image, mouse_area, opaque, tooltip, Column, Container, Row, Text,
};
use iced::{ContentFit, Element, Length};
use std::path::PathBuf;

/// What the dialog shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogPayload {
    pub title: String,
    pub description: String,
    pub image: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    payload: Option<DialogPayload>,
}

impl State {
    pub fn open(&mut self, payload: DialogPayload) {
        self.payload = Some(payload);
    }

    pub fn close(&mut self) {
        self.payload = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.payload.is_some()
    }

    #[must_use]
    pub fn payload(&self) -> Option<&DialogPayload> {
        self.payload.as_ref()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

pub fn update(message: Message, state: &mut State) {
    match message {
        Message::Close => state.close(),
    }
}

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub payload: &'a DialogPayload,
}

/// Render the dialog layer. The caller stacks it over the page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let payload = ctx.payload;

    let close = tooltip(
        button(icons::colored(Glyph::Close, sizing::ICON_MD, palette::WHITE))
            .on_press(Message::Close)
            .padding(spacing::XS)
            .style(styles::button::dialog_close),
        Text::new(ctx.i18n.tr("lightbox-close")).size(typography::BODY2),
        tooltip::Position::Bottom,
    );

    let title_bar = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(
                Text::new(payload.title.clone())
                    .size(typography::H5)
                    .width(Length::Fill),
            )
            .push(close),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::brand_bar);

    let picture = image(image::Handle::from_path(&payload.image))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT));

    let body = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(picture)
        .push(Text::new(payload.description.clone()).size(typography::BODY1));

    let sheet = Container::new(Column::new().push(title_bar).push(body))
        .max_width(sizing::LIGHTBOX_MAX_WIDTH)
        .style(styles::container::sheet);

    let layer = Container::new(opaque(sheet)).padding(spacing::XL);

    mouse_area(
        center(layer)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Close)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> DialogPayload {
        DialogPayload {
            title: title.to_string(),
            description: format!("{title} description"),
            image: PathBuf::from(format!("{title}.png")),
        }
    }

    #[test]
    fn starts_closed() {
        let state = State::default();
        assert!(!state.is_open());
        assert!(state.payload().is_none());
    }

    #[test]
    fn opening_twice_keeps_the_second_payload() {
        let mut state = State::default();
        state.open(payload("first"));
        state.open(payload("second"));
        assert_eq!(state.payload(), Some(&payload("second")));
    }

    #[test]
    fn close_clears_from_any_state() {
        let mut state = State::default();
        state.close();
        assert!(!state.is_open());

        state.open(payload("one"));
        update(Message::Close, &mut state);
        assert!(!state.is_open());
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let payload = payload("plot");
        let _element = view(ViewContext {
            i18n: &i18n,
            payload: &payload,
        });
    }
}
