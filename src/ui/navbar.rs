// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for route-level navigation.
//!
//! Wide windows get a centered row of tabs, one per entry of
//! [`ROUTES`](crate::app::screen::ROUTES). Narrow windows get a menu button
//! that opens a slide-out drawer listing the same entries. The selected entry
//! is always derived from the current path.

use crate::app::screen::{index_for_path, Route, ROUTES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, mouse_area, opaque, tooltip, Column, Container, Row, Space, Stack, Text},
    Element, Font, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_path: &'a str,
    /// Window is narrower than the drawer breakpoint.
    pub compact: bool,
    pub drawer_open: bool,
    /// Show route glyphs next to the labels.
    pub show_icons: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(&'static str),
    ToggleDrawer,
    CloseDrawer,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(&'static str),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, drawer_open: &mut bool) -> Event {
    match message {
        Message::ToggleDrawer => {
            *drawer_open = !*drawer_open;
            Event::None
        }
        Message::CloseDrawer => {
            *drawer_open = false;
            Event::None
        }
        Message::Navigate(path) => {
            *drawer_open = false;
            Event::Navigate(path)
        }
    }
}

/// Render the navigation strip (tab row or menu button).
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = index_for_path(ctx.current_path);

    let strip: Element<'a, Message> = if ctx.compact {
        let (glyph, hint_key) = if ctx.drawer_open {
            (icons::Glyph::Close, "nav-close-drawer")
        } else {
            (icons::Glyph::Menu, "nav-open-drawer")
        };
        let menu_button = tooltip(
            button(icons::brand(glyph, sizing::ICON_MD))
                .on_press(Message::ToggleDrawer)
                .padding(spacing::XS)
                .style(styles::button::text_link),
            Text::new(ctx.i18n.tr(hint_key)).size(typography::BODY2),
            tooltip::Position::Right,
        );
        Row::new()
            .padding([spacing::XXS, spacing::XS])
            .align_y(Vertical::Center)
            .push(menu_button)
            .into()
    } else {
        let tabs = ROUTES
            .iter()
            .enumerate()
            .fold(Row::new().spacing(spacing::XS), |row, (index, route)| {
                row.push(build_tab(ctx, route, index == selected))
            });
        Container::new(tabs)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    };

    Container::new(strip)
        .width(Length::Fill)
        .style(styles::container::nav_strip)
        .into()
}

/// Render the drawer layer: a dimmed backdrop with the route list on the
/// left. The caller stacks it over the page while the drawer is open.
pub fn drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selected = index_for_path(ctx.current_path);

    let entries = ROUTES
        .iter()
        .enumerate()
        .fold(Column::new().padding([spacing::XS, 0.0]), |column, (index, route)| {
            column.push(build_drawer_item(ctx, route, index == selected))
        });

    let panel = Container::new(entries)
        .width(Length::Fixed(sizing::DRAWER_WIDTH))
        .height(Length::Fill)
        .style(styles::container::sheet);

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseDrawer);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(opaque(panel))
        .into()
}

fn label_font(selected: bool) -> Font {
    Font {
        weight: if selected { Weight::Bold } else { Weight::Semibold },
        ..Font::default()
    }
}

fn build_tab<'a>(ctx: &ViewContext<'a>, route: &Route, selected: bool) -> Element<'a, Message> {
    let mut label = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if ctx.show_icons {
        label = label.push(if selected {
            icons::brand(route.icon, sizing::ICON_MD)
        } else {
            icons::themed(route.icon, sizing::ICON_MD)
        });
    }
    label = label.push(
        Text::new(ctx.i18n.tr(route.label_key))
            .size(typography::TAB)
            .font(label_font(selected)),
    );

    let tab = button(
        Container::new(label)
            .height(Length::Fixed(sizing::NAV_TAB_HEIGHT - border::INDICATOR))
            .align_y(Vertical::Center),
    )
    .on_press(Message::Navigate(route.path))
    .padding([0.0, spacing::MD])
    .style(styles::button::tab(selected));

    let indicator: Element<'a, Message> = if selected {
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(border::INDICATOR))
            .style(styles::container::tab_indicator)
            .into()
    } else {
        Space::new().height(Length::Fixed(border::INDICATOR)).into()
    };

    Column::new()
        .width(Length::Shrink)
        .push(tab)
        .push(indicator)
        .into()
}

fn build_drawer_item<'a>(
    ctx: &ViewContext<'a>,
    route: &Route,
    selected: bool,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::LG).align_y(Vertical::Center);
    if ctx.show_icons {
        row = row.push(if selected {
            icons::brand(route.icon, sizing::ICON_MD)
        } else {
            icons::themed(route.icon, sizing::ICON_MD)
        });
    }
    row = row.push(
        Text::new(ctx.i18n.tr(route.label_key))
            .size(typography::BODY1)
            .font(Font {
                weight: if selected { Weight::Semibold } else { Weight::Normal },
                ..Font::default()
            }),
    );

    button(row)
        .on_press(Message::Navigate(route.path))
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::button::drawer_item(selected))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(i18n: &'a I18n, path: &'a str, compact: bool) -> ViewContext<'a> {
        ViewContext {
            i18n,
            current_path: path,
            compact,
            drawer_open: compact,
            show_icons: true,
        }
    }

    #[test]
    fn navbar_view_renders_tabs() {
        let i18n = I18n::default();
        let _element = view(&ctx(&i18n, "/analysis", false));
    }

    #[test]
    fn navbar_view_renders_compact() {
        let i18n = I18n::default();
        let context = ctx(&i18n, "/models", true);
        let _strip = view(&context);
        let _drawer = drawer(&context);
    }

    #[test]
    fn toggle_drawer_changes_state() {
        let mut drawer_open = false;
        assert_eq!(update(Message::ToggleDrawer, &mut drawer_open), Event::None);
        assert!(drawer_open);

        assert_eq!(update(Message::ToggleDrawer, &mut drawer_open), Event::None);
        assert!(!drawer_open);
    }

    #[test]
    fn navigating_closes_drawer_and_emits_event() {
        let mut drawer_open = true;
        let event = update(Message::Navigate("/visualizations"), &mut drawer_open);
        assert!(!drawer_open);
        assert_eq!(event, Event::Navigate("/visualizations"));
    }

    #[test]
    fn close_drawer_is_idempotent() {
        let mut drawer_open = false;
        update(Message::CloseDrawer, &mut drawer_open);
        assert!(!drawer_open);
    }
}
