// SPDX-License-Identifier: MPL-2.0
//! The scrollable page body: hero block and manifest sections.
//!
//! Every section is wrapped in a reveal probe. The probe always reports the
//! section's layout top (used by navigation links); it only reports a reveal
//! for sections marked to fade in that have not been revealed yet.

use crate::i18n::fluent::I18n;
use crate::publications::FetchState;
use crate::site::{PosterImage, Section, SectionKind, SiteManifest};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::poster;
use crate::ui::publications;
use crate::ui::reveal::RevealState;
use crate::ui::skin::Skin;
use crate::ui::styles;
use crate::ui::widgets::reveal_probe;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Section became visible enough to fade in.
    Revealed(String),
    /// Section layout top, in window coordinates of the unscrolled page.
    Measured(String, f32),
    /// Layout top of the whole page body.
    PageMeasured(f32),
    Poster(poster::Message),
    OpenLink(String),
}

/// Contextual data needed to render the page body.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub manifest: &'a SiteManifest,
    pub reveal: &'a RevealState,
    pub now: Instant,
    pub publications: &'a FetchState,
    pub poster_images: &'a HashMap<String, PosterImage>,
    pub skin: Skin,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut page = Column::new()
        .spacing(spacing::XXL)
        .padding([spacing::XXL, spacing::LG])
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(hero(&ctx));

    for section in &ctx.manifest.sections {
        page = page.push(section_view(&ctx, section));
    }

    reveal_probe(
        Container::new(page)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::page),
    )
    .on_measure(Message::PageMeasured)
    .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut hero = Column::new().spacing(spacing::XS).push(
        Text::new(ctx.manifest.title.as_str())
            .size(typography::TITLE_LG)
            .font(ctx.skin.font()),
    );
    if let Some(tagline) = &ctx.manifest.tagline {
        hero = hero.push(Text::new(tagline.as_str()).size(typography::BODY_LG));
    }
    hero.into()
}

/// Opacity a section is drawn with.
#[must_use]
pub fn section_alpha(section: &Section, reveal: &RevealState, now: Instant) -> f32 {
    if section.reveal {
        reveal.opacity(&section.id, now)
    } else {
        1.0
    }
}

fn section_view<'a>(ctx: &ViewContext<'a>, section: &'a Section) -> Element<'a, Message> {
    let alpha = section_alpha(section, ctx.reveal, ctx.now);

    let mut body = Column::new().spacing(spacing::SM).push(
        Text::new(section.heading.as_str())
            .size(typography::TITLE_MD)
            .font(ctx.skin.font()),
    );
    for paragraph in &section.paragraphs {
        body = body.push(Text::new(paragraph.as_str()).size(typography::BODY));
    }

    match section.kind {
        SectionKind::Text => {}
        SectionKind::Posters => {
            if !ctx.manifest.posters.is_empty() {
                body = body.push(
                    poster::view::gallery(
                        ctx.i18n,
                        &ctx.manifest.posters,
                        ctx.poster_images,
                        ctx.skin,
                        alpha,
                    )
                    .map(Message::Poster),
                );
            }
        }
        SectionKind::Publications => {
            body = body.push(publications::view(
                publications::ViewContext {
                    i18n: ctx.i18n,
                    state: ctx.publications,
                    skin: ctx.skin,
                    alpha,
                },
                Message::OpenLink,
            ));
        }
    }

    let body = Container::new(body)
        .width(Length::Fill)
        .style(styles::container::section(alpha));

    let id = section.id.clone();
    let mut probe = reveal_probe(body).on_measure(move |top| Message::Measured(id.clone(), top));
    if section.reveal && !ctx.reveal.is_revealed(&section.id) {
        probe = probe.on_reveal(Message::Revealed(section.id.clone()));
    }
    probe.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn section(id: &str, reveal: bool) -> Section {
        Section {
            id: id.into(),
            heading: id.into(),
            paragraphs: vec!["Text.".into()],
            reveal,
            kind: SectionKind::Text,
        }
    }

    #[test]
    fn unmarked_sections_are_always_opaque() {
        let reveal = RevealState::new();
        assert_eq!(section_alpha(&section("contact", false), &reveal, Instant::now()), 1.0);
    }

    #[test]
    fn marked_sections_follow_reveal_progress() {
        let mut reveal = RevealState::new();
        let start = Instant::now();
        let about = section("about", true);
        assert_eq!(section_alpha(&about, &reveal, start), 0.0);

        reveal.reveal("about", start);
        assert_eq!(section_alpha(&about, &reveal, start + Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn embedded_site_renders() {
        let i18n = I18n::default();
        let manifest = SiteManifest::embedded().expect("embedded manifest parses");
        let reveal = RevealState::new();
        let images = HashMap::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            manifest: &manifest,
            reveal: &reveal,
            now: Instant::now(),
            publications: &FetchState::Loading,
            poster_images: &images,
            skin: Skin::Retro,
        });
    }
}
