// SPDX-License-Identifier: MPL-2.0
//! Visualizations page: one sub-tab per plot category.

use super::common::{grid, page_heading, plot_card, tab_strip};
use super::{Message, ViewContext};
use crate::content::CATEGORIES;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons::Glyph;
use crate::ui::styles;
use iced::widget::{Column, Container};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = ctx.state.category.index();
    let category = &CATEGORIES[selected];
    let columns = if ctx.compact { 1 } else { 2 };

    let cards = category
        .items
        .iter()
        .map(|item| {
            plot_card(
                ctx,
                item,
                sizing::VISUALIZATION_IMAGE_HEIGHT,
                (Glyph::Info, ctx.i18n.tr("visualizations-view-details")),
            )
        })
        .collect();

    let panel_padding = if ctx.compact { spacing::XS } else { spacing::LG };

    let panel = Column::new()
        .push(tab_strip(
            CATEGORIES.iter().map(|category| category.name),
            selected,
            Message::SelectCategory,
        ))
        .push(Container::new(grid(cards, columns, spacing::LG)).padding(panel_padding));

    let panel = Container::new(panel).width(Length::Fill);
    let panel = if ctx.style().is_styled() {
        panel.style(styles::container::paper)
    } else {
        panel
    };

    Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(page_heading(
            ctx,
            ctx.i18n.tr("visualizations-title"),
            Some(ctx.i18n.tr("visualizations-intro")),
        ))
        .push(panel)
        .into()
}
