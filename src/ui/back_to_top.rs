// SPDX-License-Identifier: MPL-2.0
//! Floating back-to-top button, shown once the page is scrolled far enough.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Bottom-left aligned button; toasts own the bottom-right corner.
pub fn view<'a, Message: Clone + 'a>(i18n: &I18n, on_press: Message) -> Element<'a, Message> {
    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::sized(icons::arrow_up(), sizing::ICON_SM).style(
            |theme: &iced::Theme, _status| iced::widget::svg::Style {
                color: Some(theme.extended_palette().primary.base.text),
            },
        ))
        .push(Text::new(i18n.tr("back-to-top")).size(typography::BODY_SM));

    Container::new(
        button(label)
            .on_press(on_press)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Left)
    .align_y(alignment::Vertical::Bottom)
    .padding(spacing::LG)
    .into()
}
