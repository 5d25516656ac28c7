// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Header, navigation strip, and a scrollable holding the page and the
//! footer. The drawer and the lightbox are stacked on top when open.

use super::{Message, Screen, PAGE_SCROLL_ID};
use crate::content::AssetPaths;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::layout;
use crate::ui::lightbox;
use crate::ui::navbar;
use crate::ui::pages;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_path: &'a str,
    pub compact: bool,
    pub drawer_open: bool,
    pub lightbox: &'a lightbox::State,
    pub pages: &'a pages::State,
    pub assets: &'a AssetPaths,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let chrome = layout::ViewContext {
        i18n: ctx.i18n,
        assets: ctx.assets,
        compact: ctx.compact,
    };
    let nav = navbar::ViewContext {
        i18n: ctx.i18n,
        current_path: ctx.current_path,
        compact: ctx.compact,
        drawer_open: ctx.drawer_open,
        show_icons: ctx.assets.style().is_styled(),
    };
    let page_ctx = pages::ViewContext {
        i18n: ctx.i18n,
        assets: ctx.assets,
        state: ctx.pages,
        compact: ctx.compact,
    };

    let page = pages::view(Screen::from_path(ctx.current_path), &page_ctx).map(Message::Page);

    let content = Container::new(
        Column::new()
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .push(page),
    )
    .width(Length::Fill)
    .padding([spacing::XL, spacing::MD])
    .align_x(Horizontal::Center);

    let scroll = Scrollable::new(
        Column::new()
            .width(Length::Fill)
            .push(content)
            .push(layout::footer(&chrome)),
    )
    .id(Id::new(PAGE_SCROLL_ID))
    .width(Length::Fill)
    .height(Length::Fill);

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(layout::header(&chrome, Message::CopyLink))
        .push(navbar::view(&nav).map(Message::Navbar))
        .push(scroll);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.compact && ctx.drawer_open {
        layers = layers.push(navbar::drawer(&nav).map(Message::Navbar));
    }

    if let Some(payload) = ctx.lightbox.payload() {
        layers = layers.push(
            lightbox::view(lightbox::ViewContext {
                i18n: ctx.i18n,
                payload,
            })
            .map(Message::Lightbox),
        );
    }

    layers.into()
}
