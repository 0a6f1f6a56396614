// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: navbar and scrollable page, back-to-top button,
//! poster overlay, toasts.

use super::{Message, PAGE_SCROLL_ID};
use crate::i18n::fluent::I18n;
use crate::publications::FetchState;
use crate::site::{PosterImage, SiteManifest};
use crate::ui::back_to_top;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, toast};
use crate::ui::poster;
use crate::ui::reveal::RevealState;
use crate::ui::sections::{self, ViewContext as SectionsViewContext};
use crate::ui::skin::Skin;
use crate::ui::state::ScrollState;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length, Size};
use std::collections::HashMap;
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub manifest: &'a SiteManifest,
    pub theme_mode: ThemeMode,
    pub skin: Skin,
    pub reveal: &'a RevealState,
    pub now: Instant,
    pub poster: &'a poster::State,
    pub poster_images: &'a HashMap<String, PosterImage>,
    pub scroll: &'a ScrollState,
    pub nav_expanded: bool,
    pub window_size: Size,
    pub publications: &'a FetchState,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        title: &ctx.manifest.title,
        sections: &ctx.manifest.sections,
        expanded: ctx.nav_expanded,
        compact: navbar::is_compact(ctx.window_size.width),
        theme_mode: ctx.theme_mode,
        skin: ctx.skin,
    })
    .map(Message::Navbar);

    let page = sections::view(SectionsViewContext {
        i18n: ctx.i18n,
        manifest: ctx.manifest,
        reveal: ctx.reveal,
        now: ctx.now,
        publications: ctx.publications,
        poster_images: ctx.poster_images,
        skin: ctx.skin,
    })
    .map(Message::Sections);

    let scroll = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        });

    let base = Container::new(Column::new().push(navbar).push(scroll))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.scroll.back_to_top_visible() {
        layers = layers.push(back_to_top::view(ctx.i18n, Message::BackToTop));
    }

    if let Some(poster) = ctx
        .poster
        .active_id()
        .and_then(|id| ctx.manifest.poster(id))
    {
        layers = layers.push(
            poster::view::overlay(poster::view::ViewContext {
                i18n: ctx.i18n,
                state: ctx.poster,
                poster,
                image: ctx.poster_images.get(&poster.id),
                window: ctx.window_size,
                skin: ctx.skin,
            })
            .map(Message::Poster),
        );
    }

    layers
        .push(toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
