// SPDX-License-Identifier: MPL-2.0
//! Analysis page: four plot cards and the key findings.

use super::common::{bold, card, grid, page_heading, plot_card, section_heading};
use super::{Message, ViewContext};
use crate::content::{ANALYSIS_ITEMS, KEY_FINDINGS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::Glyph;
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::{Column, Text};
use iced::{Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = if ctx.compact { 1 } else { 2 };

    let plots = ANALYSIS_ITEMS
        .iter()
        .map(|item| {
            plot_card(
                ctx,
                item,
                sizing::ANALYSIS_IMAGE_HEIGHT,
                (Glyph::ZoomOutMap, ctx.i18n.tr("analysis-view-larger")),
            )
        })
        .collect();

    let findings = KEY_FINDINGS
        .iter()
        .map(|finding| {
            card(
                ctx,
                Column::new()
                    .spacing(spacing::SM)
                    .padding(spacing::MD)
                    .push(
                        Text::new(finding.title)
                            .size(typography::H6)
                            .font(bold(Weight::Semibold))
                            .style(styles::text::brand),
                    )
                    .push(Text::new(finding.body).size(typography::BODY2)),
            )
            .height(Length::Fill)
            .into()
        })
        .collect();

    Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(page_heading(
            ctx,
            ctx.i18n.tr("analysis-title"),
            Some(ctx.i18n.tr("analysis-intro")),
        ))
        .push(grid(plots, columns, spacing::XL))
        .push(
            Column::new()
                .spacing(spacing::LG)
                .push(section_heading(ctx, ctx.i18n.tr("analysis-key-findings")))
                .push(grid(findings, columns, spacing::LG)),
        )
        .into()
}
