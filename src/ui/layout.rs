// SPDX-License-Identifier: MPL-2.0
//! Header and footer around the page content.

use crate::content::AssetPaths;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::styles;
use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{button, image, rule, tooltip, Column, Container, Row, Text};
use iced::{ContentFit, Element, Font, Length};

pub const REPOSITORY_URL: &str = "https://github.com/jonx0037/DS_6306_Project";
pub const SMU_DATA_SCIENCE_URL: &str = "https://www.smu.edu/datascience";

/// Contextual data needed to render the header and footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetPaths,
    pub compact: bool,
}

fn semibold() -> Font {
    Font {
        weight: Weight::Semibold,
        ..Font::default()
    }
}

/// Current calendar year for the copyright line.
#[must_use]
pub fn copyright_year() -> i32 {
    chrono::Local::now().year()
}

/// App bar: logo, project title, and the repository button. Pressing the
/// button emits `on_copy_link` with [`REPOSITORY_URL`].
pub fn header<'a, Message: Clone + 'a>(
    ctx: &ViewContext<'a>,
    on_copy_link: impl Fn(&'static str) -> Message,
) -> Element<'a, Message> {
    let logo = image(image::Handle::from_path(ctx.assets.logo()))
        .content_fit(ContentFit::Contain)
        .height(Length::Fixed(sizing::LOGO_HEIGHT));

    let titles = Column::new()
        .push(
            Text::new(ctx.i18n.tr("header-title"))
                .size(typography::H5)
                .font(semibold())
                .style(styles::text::brand),
        )
        .push(
            Text::new(ctx.i18n.tr("header-subtitle"))
                .size(typography::BODY2)
                .style(styles::text::muted),
        );

    let github = tooltip(
        button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::brand(Glyph::Link, sizing::ICON_SM))
                .push(Text::new(ctx.i18n.tr("header-github")).size(typography::BODY2)),
        )
        .on_press(on_copy_link(REPOSITORY_URL))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::outlined),
        Text::new(copy_hint(ctx.i18n, REPOSITORY_URL)).size(typography::BODY2),
        tooltip::Position::Left,
    );

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .push(logo)
        .push(Container::new(titles).width(Length::Fill))
        .push(github);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::app_bar)
        .into()
}

/// Tooltip text for buttons that copy a link to the clipboard.
#[must_use]
pub fn copy_hint(i18n: &I18n, url: &str) -> String {
    i18n.tr_with_args("link-copy-hint", &[("url", url)])
}

fn link_line<'a, Message: 'a>(glyph: Glyph, label: String, url: &'static str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::themed(glyph, sizing::ICON_SM))
        .push(Text::new(label).size(typography::BODY2))
        .push(Text::new(url).size(typography::BODY2).style(styles::text::muted))
        .into()
}

/// Footer with the project summary, links, and about blurb.
pub fn footer<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let year = copyright_year().to_string();

    if !ctx.assets.style().is_styled() {
        return Container::new(
            Text::new(ctx.i18n.tr_with_args("footer-plain", &[("year", year.as_str())]))
                .size(typography::BODY2),
        )
        .width(Length::Fill)
        .padding([spacing::LG, spacing::MD])
        .align_x(Horizontal::Center)
        .style(styles::container::footer)
        .into();
    }

    let summary = Column::new()
        .spacing(spacing::MD)
        .push(
            image(image::Handle::from_path(ctx.assets.logo()))
                .content_fit(ContentFit::Contain)
                .height(Length::Fixed(sizing::FOOTER_LOGO_HEIGHT)),
        )
        .push(
            Text::new(ctx.i18n.tr("footer-summary"))
                .size(typography::BODY2)
                .style(styles::text::muted),
        );

    let links = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("footer-links-title"))
                .size(typography::H6)
                .style(styles::text::brand),
        )
        .push(link_line(Glyph::Link, ctx.i18n.tr("footer-github"), REPOSITORY_URL))
        .push(link_line(
            Glyph::School,
            ctx.i18n.tr("footer-smu"),
            SMU_DATA_SCIENCE_URL,
        ));

    let about = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(ctx.i18n.tr("footer-about-title"))
                .size(typography::H6)
                .style(styles::text::brand),
        )
        .push(
            Text::new(ctx.i18n.tr("footer-course"))
                .size(typography::BODY2)
                .style(styles::text::muted),
        )
        .push(
            Text::new(ctx.i18n.tr("footer-tagline"))
                .size(typography::BODY2)
                .style(styles::text::muted),
        );

    let columns: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::LG)
            .push(summary)
            .push(links)
            .push(about)
            .into()
    } else {
        Row::new()
            .spacing(spacing::LG)
            .push(Container::new(summary).width(Length::FillPortion(1)))
            .push(Container::new(links).width(Length::FillPortion(1)))
            .push(Container::new(about).width(Length::FillPortion(1)))
            .into()
    };

    let body = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(columns)
        .push(rule::horizontal(1))
        .push(
            Container::new(
                Text::new(ctx.i18n.tr_with_args("footer-copyright", &[("year", year.as_str())]))
                    .size(typography::BODY2)
                    .style(styles::text::muted),
            )
            .width(Length::Fill)
            .align_x(Horizontal::Center),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::MD])
        .align_x(Horizontal::Center)
        .style(styles::container::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::PresentationStyle;

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        Copy(&'static str),
    }

    #[test]
    fn copyright_year_is_plausible() {
        assert!(copyright_year() >= 2025);
    }

    #[test]
    fn copy_hint_names_the_url() {
        let hint = copy_hint(&I18n::default(), REPOSITORY_URL);
        assert!(hint.contains(REPOSITORY_URL), "{hint}");
        assert_ne!(hint, "link-copy-hint");
    }

    #[test]
    fn header_and_footer_render_in_both_styles() {
        let i18n = I18n::default();
        for style in [PresentationStyle::Styled, PresentationStyle::Plain] {
            let assets = AssetPaths::new("public", style);
            for compact in [false, true] {
                let ctx = ViewContext {
                    i18n: &i18n,
                    assets: &assets,
                    compact,
                };
                let _header: Element<'_, Action> = header(&ctx, Action::Copy);
                let _footer: Element<'_, Action> = footer(&ctx);
            }
        }
    }
}
