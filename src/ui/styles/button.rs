// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button, derived from the theme's primary color.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        button::Status::Hovered => palette.primary.strong,
        button::Status::Disabled => palette.primary.weak,
        button::Status::Active | button::Status::Pressed => palette.primary.base,
    };

    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            color: palette.primary.strong.color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: if matches!(status, button::Status::Hovered) {
            shadow::MD
        } else {
            shadow::NONE
        },
        snap: true,
    }
}

/// Buttons drawn over the poster backdrop.
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Navigation entries: flat, highlighted on hover.
pub fn nav_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
    }
}

/// Inline hyperlink: primary-colored text, no chrome. `alpha` follows the
/// enclosing section's fade.
pub fn link(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let color = match status {
            button::Status::Hovered | button::Status::Pressed => palette.primary.strong.color,
            _ => palette.primary.base.color,
        };
        button::Style {
            background: None,
            text_color: Color {
                a: color.a * alpha,
                ..color
            },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Poster gallery trigger: a framed card around the thumbnail.
pub fn thumbnail(corner: f32, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.extended_palette();
        let (frame, width) = match status {
            button::Status::Hovered | button::Status::Pressed => {
                (palette.primary.base.color, border::WIDTH_MD)
            }
            _ => (palette.background.strong.color, border::WIDTH_SM),
        };
        button::Style {
            background: None,
            text_color: Color {
                a: alpha,
                ..palette.background.base.text
            },
            border: Border {
                color: Color {
                    a: frame.a * alpha,
                    ..frame
                },
                width,
                radius: corner.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
