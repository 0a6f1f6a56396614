// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Drop-down panel for the compact navigation menu.
///
/// The color is derived from the active theme background with a slight
/// opacity, so the panel stays readable over the page in every theme.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Page body behind the sections.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Section body; text alpha is the reveal progress.
pub fn section(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let text = theme.extended_palette().background.base.text;
        container::Style {
            text_color: Some(Color {
                a: text.a * alpha,
                ..text
            }),
            ..Default::default()
        }
    }
}
