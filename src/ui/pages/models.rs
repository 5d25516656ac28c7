// SPDX-License-Identifier: MPL-2.0
//! Models page: per-model sub-tabs and the comparison table.

use super::common::{bold, card, page_heading, section_heading, tab_strip};
use super::{Message, ViewContext};
use crate::content::models::BEST_MODEL;
use crate::content::{format_metric, ModelMetrics, MODELS};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::font::Weight;
use iced::widget::{image, rule, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = ctx.state.model.index();
    let model = &MODELS[selected];

    let panel = Column::new()
        .push(tab_strip(
            MODELS.iter().map(|model| model.model_name),
            selected,
            Message::SelectModel,
        ))
        .push(Container::new(model_detail(ctx, model)).padding(spacing::LG));

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
            ctx.i18n.tr("models-title"),
            Some(ctx.i18n.tr("models-intro")),
        ))
        .push(panel)
        .push(
            Column::new()
                .spacing(spacing::LG)
                .push(section_heading(ctx, ctx.i18n.tr("models-comparison")))
                .push(comparison_table(ctx)),
        )
        .into()
}

fn card_title<'a>(label: String) -> Text<'a> {
    Text::new(label)
        .size(typography::H6)
        .font(bold(Weight::Semibold))
        .style(styles::text::brand)
}

fn model_detail<'a>(ctx: &ViewContext<'a>, model: &ModelMetrics) -> Element<'a, Message> {
    let metric_rows = [
        ("metric-rmse", model.rmse),
        ("metric-mae", model.mae),
        ("metric-r2", model.r2),
    ]
    .into_iter()
    .fold(Column::new().spacing(spacing::XS), |column, (key, value)| {
        column
            .push(
                Row::new()
                    .push(
                        Text::new(ctx.i18n.tr(key))
                            .font(bold(Weight::Medium))
                            .width(Length::Fill),
                    )
                    .push(Text::new(format_metric(value))),
            )
            .push(rule::horizontal(1))
    });

    let overview = card(
        ctx,
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(card_title(ctx.i18n.tr("models-overview")))
            .push(
                Text::new(model.description)
                    .size(typography::BODY2)
                    .style(styles::text::muted),
            )
            .push(card_title(ctx.i18n.tr("models-metrics")))
            .push(metric_rows),
    )
    .height(Length::Shrink);

    let plot = card(
        ctx,
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(card_title(ctx.i18n.tr("models-visualization")))
            .push(
                image(image::Handle::from_path(
                    ctx.assets.plot(model.performance_plot),
                ))
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MODEL_PLOT_HEIGHT)),
            ),
    );

    if ctx.compact {
        Column::new()
            .spacing(spacing::LG)
            .push(overview)
            .push(plot)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .push(Container::new(overview).width(Length::FillPortion(1)))
            .push(Container::new(plot).width(Length::FillPortion(2)))
            .into()
    }
}

fn table_row<'a>(cells: [String; 4], weight: Weight) -> Row<'a, Message> {
    cells
        .into_iter()
        .enumerate()
        .fold(Row::new().padding(spacing::MD), |row, (index, cell)| {
            let (portion, align) = if index == 0 {
                (2, Horizontal::Left)
            } else {
                (1, Horizontal::Right)
            };
            row.push(
                Container::new(Text::new(cell).font(bold(weight)))
                    .width(Length::FillPortion(portion))
                    .align_x(align),
            )
        })
}

fn comparison_table<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Container::new(table_row(
        [
            ctx.i18n.tr("models-column-model"),
            ctx.i18n.tr("metric-rmse"),
            ctx.i18n.tr("metric-mae"),
            ctx.i18n.tr("metric-r2"),
        ],
        Weight::Semibold,
    ))
    .width(Length::Fill)
    .style(styles::container::brand_bar);

    let best_suffix = ctx.i18n.tr("models-best-suffix");

    let rows = MODELS.iter().enumerate().fold(
        Column::new().push(header),
        |table, (index, model)| {
            let is_best = index == BEST_MODEL;
            let name = if is_best {
                format!("{} {}", model.model_name, best_suffix)
            } else {
                model.model_name.to_string()
            };
            let row = Container::new(table_row(
                [
                    name,
                    format_metric(model.rmse),
                    format_metric(model.mae),
                    format_metric(model.r2),
                ],
                if is_best {
                    Weight::Semibold
                } else {
                    Weight::Normal
                },
            ))
            .width(Length::Fill);

            let row = if is_best {
                row.style(styles::container::highlighted_row)
            } else if index % 2 == 0 {
                row.style(styles::container::striped_row)
            } else {
                row
            };
            table.push(row)
        },
    );

    card(ctx, rows).into()
}
