// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: brand, section links and theme toggles.
//!
//! Below the compact breakpoint the links collapse into a menu button; the
//! `expanded` flag tracks whether that menu is open. Following a link always
//! collapses it.

use crate::i18n::fluent::I18n;
use crate::site::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::skin::Skin;
use crate::ui::styles;
use crate::ui::theming::{ThemeIcon, ThemeMode};
use iced::widget::{button, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    pub sections: &'a [Section],
    pub expanded: bool,
    pub compact: bool,
    pub theme_mode: ThemeMode,
    pub skin: Skin,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    BrandPressed,
    SectionPressed(String),
    ToggleTheme,
    ToggleCrt,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ScrollToTop,
    ScrollToSection(String),
    ToggleTheme,
    ToggleCrt,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, expanded: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *expanded = !*expanded;
            Event::None
        }
        Message::BrandPressed => {
            *expanded = false;
            Event::ScrollToTop
        }
        Message::SectionPressed(id) => {
            *expanded = false;
            Event::ScrollToSection(id)
        }
        Message::ToggleTheme => Event::ToggleTheme,
        Message::ToggleCrt => Event::ToggleCrt,
    }
}

/// Whether a window of `width` uses the collapsed menu.
#[must_use]
pub fn is_compact(width: f32) -> bool {
    width < sizing::COMPACT_NAV_BREAKPOINT
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.compact && ctx.expanded {
        content = content.push(build_dropdown(&ctx));
    }

    Container::new(content)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.title)
            .size(typography::TITLE_SM)
            .font(ctx.skin.font()),
    )
    .on_press(Message::BrandPressed)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav_item);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if !ctx.compact {
        for section in ctx.sections {
            row = row.push(link(section, ctx.skin));
        }
    }

    row = row.push(theme_toggle(ctx)).push(crt_toggle(ctx));

    if ctx.compact {
        let menu = button(icons::sized(icons::tinted(icons::menu()), sizing::ICON_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::nav_item);
        row = row.push(tooltip(
            menu,
            Text::new(ctx.i18n.tr(if ctx.expanded {
                "nav-menu-close"
            } else {
                "nav-menu-open"
            }))
            .size(typography::CAPTION),
            tooltip::Position::Bottom,
        ));
    }

    row.into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let links = Column::with_children(
        ctx.sections
            .iter()
            .map(|section| link(section, ctx.skin).width(Length::Fill).into()),
    )
    .spacing(spacing::XXS);

    Container::new(links)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn link(section: &Section, skin: Skin) -> iced::widget::Button<'_, Message> {
    button(
        Text::new(section.heading.as_str())
            .size(typography::BODY)
            .font(skin.font()),
    )
    .on_press(Message::SectionPressed(section.id.clone()))
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav_item)
}

fn theme_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let icon = match ctx.theme_mode.icon() {
        ThemeIcon::Sun => icons::sun(),
        ThemeIcon::Moon => icons::moon(),
    };
    let toggle = button(icons::sized(icons::tinted(icon), sizing::ICON_MD))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::nav_item);
    tooltip(
        toggle,
        Text::new(ctx.i18n.tr("nav-toggle-theme")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}

fn crt_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let key = if ctx.theme_mode == ThemeMode::Crt {
        "nav-crt-off"
    } else {
        "nav-crt-on"
    };
    let toggle = button(icons::sized(icons::tinted(icons::monitor()), sizing::ICON_MD))
        .on_press(Message::ToggleCrt)
        .padding(spacing::XS)
        .style(styles::button::nav_item);
    tooltip(
        toggle,
        Text::new(ctx.i18n.tr(key)).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .into()
}
