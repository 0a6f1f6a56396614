// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are single-color shapes drawn with `currentColor`; callers tint them
//! through [`tinted`] so they follow the active theme. Handles are created
//! once and cached in a `OnceLock`.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(sun, "sun.svg", "Sun: shown while a dark theme is active.");
define_icon!(moon, "moon.svg", "Crescent moon: shown while the light theme is active.");
define_icon!(menu, "menu.svg", "Three horizontal bars.");
define_icon!(monitor, "monitor.svg", "Screen outline with scan lines, for the CRT toggle.");
define_icon!(arrow_up, "arrow-up.svg", "Arrow pointing up.");
define_icon!(cross, "cross.svg", "X mark shape.");

/// Resizes an icon to a square of `size` logical pixels.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with the theme's text color.
pub fn tinted<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    })
}

/// Tints an icon with a fixed color, for overlays on dark backdrops.
pub fn colored<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}
