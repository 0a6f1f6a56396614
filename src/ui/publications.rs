// SPDX-License-Identifier: MPL-2.0
//! Publication list rendering for every fetch state.

use crate::i18n::fluent::I18n;
use crate::publications::{Citation, FetchState, Segment};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::skin::Skin;
use crate::ui::styles;
use iced::font::Weight;
use iced::widget::text::Span;
use iced::widget::{button, rich_text, span, Column, Text};
use iced::{Element, Font, Length};

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a FetchState,
    pub skin: Skin,
    /// Fade progress of the enclosing section.
    pub alpha: f32,
}

/// Renders the list; `on_open_link` receives the DOI resolver URL.
pub fn view<'a, Message: Clone + 'a>(
    ctx: ViewContext<'a>,
    on_open_link: impl Fn(String) -> Message,
) -> Element<'a, Message> {
    match ctx.state {
        FetchState::Idle | FetchState::Loading => status_line(ctx.i18n.tr("publications-loading")),
        FetchState::Empty => status_line(ctx.i18n.tr("publications-empty")),
        FetchState::Failed => status_line(ctx.i18n.tr("publications-failed")),
        FetchState::Success(citations) => Column::with_children(
            citations
                .iter()
                .map(|citation| entry(citation, ctx.skin, ctx.alpha, &on_open_link)),
        )
        .spacing(spacing::SM)
        .width(Length::Fill)
        .into(),
    }
}

fn status_line<'a, Message: 'a>(line: String) -> Element<'a, Message> {
    Text::new(line).size(typography::BODY).into()
}

fn entry<'a, Message: Clone + 'a>(
    citation: &'a Citation,
    skin: Skin,
    alpha: f32,
    on_open_link: &impl Fn(String) -> Message,
) -> Element<'a, Message> {
    let body = skin.font();
    let emphasis = Font {
        weight: Weight::Bold,
        ..body
    };

    let spans: Vec<Span<'a, (), Font>> = citation
        .segments()
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => span(text.as_str()).font(body),
            Segment::Emphasis(text) => span(text.as_str()).font(emphasis),
        })
        .collect();

    let mut item = Column::new()
        .spacing(spacing::XXS)
        .push(rich_text(spans).size(typography::BODY).width(Length::Fill));

    if let (Some(doi), Some(url)) = (citation.doi(), citation.doi_url()) {
        item = item.push(
            button(Text::new(format!("doi:{doi}")).size(typography::BODY_SM))
                .on_press(on_open_link(url))
                .padding(0)
                .style(styles::button::link(alpha)),
        );
    }

    item.into()
}
