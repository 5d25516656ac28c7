// SPDX-License-Identifier: MPL-2.0
//! Home page: hero banner, feature cards, and the highlight section.

use super::common::{accent_divider, bold, card, grid, section_heading};
use super::{Message, ViewContext};
use crate::app::screen::Screen;
use crate::content::home::{FeatureCard, HIGHLIGHT_BODY};
use crate::content::FEATURES;
use crate::ui::layout::{copy_hint, REPOSITORY_URL};
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    button, container, image, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{Border, Color, ContentFit, Element, Length, Theme};

/// Vertical offset of the overview section inside the page scrollable.
pub const FEATURES_OFFSET: f32 = sizing::HERO_HEIGHT + spacing::XXL;

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.style().is_styled() {
        styled(ctx)
    } else {
        plain(ctx)
    }
}

fn styled<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = if ctx.compact { 1 } else { 4 };
    let cards = FEATURES
        .iter()
        .map(|feature| feature_card(ctx, feature))
        .collect();

    Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(hero(ctx))
        .push(overview(ctx))
        .push(grid(cards, columns, spacing::XL))
        .push(highlights(ctx))
        .into()
}

/// Title, subtitle, and bare feature cards.
fn plain<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = if ctx.compact { 1 } else { 2 };
    let cards = FEATURES
        .iter()
        .map(|feature| {
            card(
                ctx,
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(
                        Text::new(feature.title)
                            .size(typography::H6)
                            .font(bold(Weight::Semibold)),
                    )
                    .push(
                        Text::new(feature.description)
                            .size(typography::BODY2)
                            .center()
                            .style(styles::text::muted),
                    ),
            )
            .padding(spacing::LG)
            .into()
        })
        .collect();

    Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(
            Column::new()
                .spacing(spacing::SM)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .push(
                    Text::new(ctx.i18n.tr("home-hero-title"))
                        .size(typography::H1)
                        .font(bold(Weight::Bold))
                        .style(styles::text::brand),
                )
                .push(
                    Text::new(format!(
                        "{} - {}",
                        ctx.i18n.tr("header-subtitle"),
                        ctx.i18n.tr("footer-smu")
                    ))
                    .size(typography::H5)
                    .style(styles::text::muted),
                ),
        )
        .push(grid(cards, columns, spacing::XL))
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let learn_more = button(
        Text::new(ctx.i18n.tr("home-learn-more")).size(typography::H5),
    )
    .on_press(Message::ShowFeatures)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary);

    let github = tooltip(
        button(Text::new(ctx.i18n.tr("home-view-github")).size(typography::H5))
            .on_press(Message::CopyLink(REPOSITORY_URL))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::on_dark),
        Text::new(copy_hint(ctx.i18n, REPOSITORY_URL)).size(typography::BODY2),
        tooltip::Position::Bottom,
    );

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("home-hero-title"))
                .size(typography::H1)
                .font(bold(Weight::Bold))
                .style(styles::text::on_dark),
        )
        .push(
            Container::new(
                Text::new(ctx.i18n.tr("home-hero-subtitle"))
                    .size(typography::H5)
                    .center()
                    .style(styles::text::on_dark),
            )
            .max_width(sizing::TEXT_MAX_WIDTH),
        )
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(Vertical::Center)
                .push(learn_more)
                .push(github),
        );

    let backdrop = image(image::Handle::from_path(ctx.assets.hero()))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fill);

    let veil = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::BLACK
                }
                .into(),
            ),
            ..Default::default()
        });

    Container::new(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(veil)
            .push(
                Container::new(content)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::HERO_HEIGHT))
    .style(styles::container::hero)
    .into()
}

fn overview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("home-overview-title"))
                .size(typography::H3)
                .font(bold(Weight::Semibold))
                .style(styles::text::brand),
        )
        .push(accent_divider(sizing::DIVIDER_LONG))
        .push(
            Container::new(
                Text::new(ctx.i18n.tr("home-overview-body"))
                    .size(typography::BODY1)
                    .center(),
            )
            .max_width(sizing::TEXT_MAX_WIDTH),
        )
        .into()
}

fn feature_card<'a>(ctx: &ViewContext<'a>, feature: &FeatureCard) -> Element<'a, Message> {
    let target: Screen = feature.target;
    let explore = button(Text::new(ctx.i18n.tr("home-explore")).size(typography::BODY2))
        .on_press(Message::Navigate(target.path()))
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::outlined);

    card(
        ctx,
        Column::new()
            .spacing(spacing::MD)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(icons::brand(feature.icon, sizing::ICON_LG))
            .push(
                Text::new(feature.title)
                    .size(typography::H6)
                    .font(bold(Weight::Semibold))
                    .style(styles::text::brand),
            )
            .push(
                Text::new(feature.description)
                    .size(typography::BODY2)
                    .center()
                    .style(styles::text::muted),
            )
            .push(explore),
    )
    .height(Length::Fill)
    .into()
}

fn highlights<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let preview = Container::new(
        image(image::Handle::from_path(ctx.assets.visualization_preview()))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HIGHLIGHT_IMAGE_HEIGHT)),
    )
    .width(Length::Fill)
    .style(|theme: &Theme| container::Style {
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..styles::container::card(theme)
    });

    let text_side = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("home-insights-title"))
                .size(typography::H5)
                .style(styles::text::brand_dark),
        )
        .push(Text::new(HIGHLIGHT_BODY).size(typography::BODY1))
        .push(
            button(Text::new(ctx.i18n.tr("home-explore-visualizations")))
                .on_press(Message::Navigate(Screen::Visualizations.path()))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    let body: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::XL)
            .push(preview)
            .push(text_side)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XL)
            .align_y(Vertical::Center)
            .push(preview)
            .push(text_side)
            .into()
    };

    Column::new()
        .spacing(spacing::LG)
        .push(section_heading(ctx, ctx.i18n.tr("home-highlights-title")))
        .push(body)
        .into()
}
