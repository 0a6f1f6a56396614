// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Border, Color, Element, Length, Theme};

fn message_text(notification: &Notification, i18n: &I18n) -> String {
    if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

/// Renders one toast: accent bar, message and dismiss button.
pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let accent_bar = Container::new(Space::new().width(Length::Fixed(border::WIDTH_MD * 2.0)))
        .height(Length::Fixed(sizing::ICON_MD))
        .style(move |_theme: &Theme| container::Style {
            background: Some(accent.into()),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });

    let dismiss = button(text("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(notification.id()))
        .padding(spacing::XXS)
        .style(button::text);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(accent_bar)
        .push(
            Container::new(Text::new(message_text(notification, i18n)).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_style(theme, accent))
        .into()
}

/// Visible toasts stacked in the bottom-right corner.
pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let toasts = Column::with_children(manager.visible().map(|n| view(n, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn toast_style(theme: &Theme, accent: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..container::Style::default()
    }
}
