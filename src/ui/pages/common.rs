// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the pages: headings, grids, plot cards, and
//! sub-tab strips.

use super::{Message, ViewContext};
use crate::content::PlotItem;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::lightbox::DialogPayload;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    button, image, mouse_area, Column, Container, Row, Space, Stack, Text,
};
use iced::{ContentFit, Element, Font, Length};

pub(super) fn bold(weight: Weight) -> Font {
    Font {
        weight,
        ..Font::default()
    }
}

/// Page title with the short accent bar and an optional intro paragraph.
pub(super) fn page_heading<'a>(
    ctx: &ViewContext<'a>,
    title: String,
    intro: Option<String>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::H3)
                .font(bold(Weight::Semibold))
                .style(styles::text::brand),
        );

    if ctx.style().is_styled() {
        column = column.push(accent_divider(sizing::DIVIDER_LONG));
    }

    if let Some(intro) = intro {
        column = column.push(
            Container::new(Text::new(intro).size(typography::BODY1).center())
                .max_width(sizing::TEXT_MAX_WIDTH),
        );
    }

    column.into()
}

/// Left-aligned section title with the short accent bar.
pub(super) fn section_heading<'a>(ctx: &ViewContext<'a>, title: String) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::SM).push(
        Text::new(title)
            .size(typography::H4)
            .font(bold(Weight::Semibold))
            .style(styles::text::brand),
    );
    if ctx.style().is_styled() {
        column = column.push(accent_divider(sizing::DIVIDER_SHORT));
    }
    column.into()
}

pub(super) fn accent_divider<'a>(width: f32) -> Element<'a, Message> {
    Container::new(Space::new())
        .width(Length::Fixed(width))
        .height(Length::Fixed(border::WIDTH_MD))
        .style(styles::container::accent_divider)
        .into()
}

/// Lays cells out in rows of `columns`, padding the last row so every cell
/// keeps the same width.
pub(super) fn grid<'a>(
    cells: Vec<Element<'a, Message>>,
    columns: usize,
    gap: f32,
) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut grid = Column::new().spacing(gap).width(Length::Fill);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut row = Row::new().spacing(gap).width(Length::Fill);
        for _ in 0..columns {
            row = match cells.next() {
                Some(cell) => row.push(Container::new(cell).width(Length::FillPortion(1))),
                None => row.push(Space::new().width(Length::FillPortion(1))),
            };
        }
        grid = grid.push(row);
    }

    grid.into()
}

/// Card surface, or a bare padded block in the plain rendition.
pub(super) fn card<'a>(
    ctx: &ViewContext<'a>,
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    let container = Container::new(content).width(Length::Fill);
    if ctx.style().is_styled() {
        container.style(styles::container::card)
    } else {
        container.padding(spacing::XS)
    }
}

/// A plot card. In the styled rendition the image, the zoom badge, and the
/// action button all open the lightbox.
pub(super) fn plot_card<'a>(
    ctx: &ViewContext<'a>,
    item: &PlotItem,
    image_height: f32,
    action: (Glyph, String),
) -> Element<'a, Message> {
    let path = ctx.assets.plot(item.file_name);
    let picture = image(image::Handle::from_path(&path))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill)
        .height(Length::Fixed(image_height));

    let title = Text::new(item.title)
        .size(typography::H6)
        .font(bold(Weight::Semibold))
        .style(styles::text::brand);
    let description = Text::new(item.description)
        .size(typography::BODY2)
        .style(styles::text::muted);

    if !ctx.style().is_styled() {
        return card(
            ctx,
            Column::new()
                .spacing(spacing::XS)
                .push(picture)
                .push(title)
                .push(description),
        )
        .into();
    }

    let expand = Message::Expand(DialogPayload {
        title: item.title.to_string(),
        description: item.description.to_string(),
        image: path,
    });

    let zoom_badge = button(icons::brand(Glyph::ZoomOutMap, sizing::ICON_MD))
        .on_press(expand.clone())
        .padding(spacing::XS)
        .style(styles::button::zoom_overlay);

    let media = Stack::new()
        .width(Length::Fill)
        .push(
            mouse_area(
                Container::new(picture)
                    .padding(spacing::MD)
                    .width(Length::Fill)
                    .style(styles::container::image_well),
            )
            .on_press(expand.clone()),
        )
        .push(
            Container::new(zoom_badge)
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding(spacing::XS),
        );

    let (glyph, label) = action;
    let action_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::brand(glyph, sizing::ICON_SM))
            .push(Text::new(label).size(typography::BODY2)),
    )
    .on_press(expand)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::text_link);

    card(
        ctx,
        Column::new()
            .push(media)
            .push(
                Column::new()
                    .spacing(spacing::XS)
                    .padding(spacing::MD)
                    .push(title)
                    .push(description),
            )
            .push(
                Container::new(action_button)
                    .width(Length::Fill)
                    .align_x(Horizontal::Right)
                    .padding(spacing::MD),
            ),
    )
    .into()
}

/// Full-width strip of sub-tabs.
pub(super) fn tab_strip<'a>(
    labels: impl IntoIterator<Item = &'static str>,
    selected: usize,
    on_select: fn(usize) -> Message,
) -> Element<'a, Message> {
    let row = labels.into_iter().enumerate().fold(
        Row::new().width(Length::Fill),
        |row, (index, label)| {
            let is_selected = index == selected;
            let tab = button(
                Container::new(
                    Text::new(label)
                        .size(typography::BODY1)
                        .font(bold(Weight::Semibold)),
                )
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            )
            .on_press(on_select(index))
            .width(Length::Fill)
            .padding([spacing::MD, spacing::XS])
            .style(styles::button::tab(is_selected));

            let indicator: Element<'a, Message> = if is_selected {
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fixed(border::INDICATOR))
                    .style(styles::container::tab_indicator)
                    .into()
            } else {
                Space::new().height(Length::Fixed(border::INDICATOR)).into()
            };

            row.push(
                Column::new()
                    .width(Length::FillPortion(1))
                    .push(tab)
                    .push(indicator),
            )
        },
    );

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::nav_strip)
        .into()
}
