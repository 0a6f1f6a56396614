// SPDX-License-Identifier: MPL-2.0
//! Theme controller: light, dark and CRT modes.
//!
//! The active [`ThemeMode`] is the only source of truth for the window theme
//! and is persisted under a single preference key. Data written by older
//! builds kept a separate `crt-mode` flag; it is folded into the theme key
//! once when the controller initializes.

use crate::app::preferences::{PreferenceStore, LEGACY_CRT_KEY, THEME_KEY};
use crate::ui::design_tokens::palette;
use crate::ui::skin::Skin;
use iced::Theme;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Crt,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Crt => "crt",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Result of the light/dark toggle: dark goes to light, anything else to dark.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light | ThemeMode::Crt => ThemeMode::Dark,
        }
    }

    /// Result of the CRT toggle: CRT goes back to light, anything else to CRT.
    #[must_use]
    pub fn crt_toggled(self) -> Self {
        match self {
            ThemeMode::Crt => ThemeMode::Light,
            ThemeMode::Light | ThemeMode::Dark => ThemeMode::Crt,
        }
    }

    /// Icon shown on the light/dark toggle.
    #[must_use]
    pub fn icon(self) -> ThemeIcon {
        if self.is_dark() {
            ThemeIcon::Sun
        } else {
            ThemeIcon::Moon
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "crt" => Ok(ThemeMode::Crt),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Sun,
    Moon,
}

/// Owns the applied theme and keeps the store in sync with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    /// Reads the stored theme, migrating the legacy CRT flag if present.
    ///
    /// Returns the controller and an optional warning key from the store.
    pub fn initialize(store: &mut dyn PreferenceStore) -> (Self, Option<String>) {
        let stored = store.get(THEME_KEY);
        let mut mode = match stored.as_deref().map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(UnknownThemeMode(value))) => {
                log::warn!("unknown stored theme {:?}, using light", value);
                ThemeMode::default()
            }
            None => ThemeMode::default(),
        };

        let mut warning = None;
        if let Some(legacy) = store.get(LEGACY_CRT_KEY) {
            if legacy.trim().eq_ignore_ascii_case("on") {
                mode = ThemeMode::Crt;
            }
            log::info!("migrating legacy {} preference", LEGACY_CRT_KEY);
            warning = store.set(THEME_KEY, mode.as_str()).or(warning);
            warning = store.remove(LEGACY_CRT_KEY).or(warning);
        }

        (Self { mode }, warning)
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn icon(&self) -> ThemeIcon {
        self.mode.icon()
    }

    /// Light/dark toggle. Returns a warning key if persisting failed.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Option<String> {
        self.apply(self.mode.toggled(), store)
    }

    /// CRT toggle. Returns a warning key if persisting failed.
    pub fn toggle_crt(&mut self, store: &mut dyn PreferenceStore) -> Option<String> {
        self.apply(self.mode.crt_toggled(), store)
    }

    fn apply(&mut self, mode: ThemeMode, store: &mut dyn PreferenceStore) -> Option<String> {
        self.mode = mode;
        log::debug!("theme set to {}", mode);
        store.set(THEME_KEY, mode.as_str())
    }
}

/// Builds the iced theme for a mode and skin combination.
#[must_use]
pub fn app_theme(mode: ThemeMode, skin: Skin) -> Theme {
    match (mode, skin) {
        (ThemeMode::Crt, _) => {
            let mut colors = Theme::Dark.palette();
            colors.background = palette::CRT_BLACK;
            colors.text = palette::CRT_GREEN;
            colors.primary = palette::CRT_GREEN;
            colors.success = palette::CRT_GREEN;
            Theme::custom("CRT".to_string(), colors)
        }
        (ThemeMode::Light, Skin::Retro) => {
            let mut colors = Theme::Light.palette();
            colors.background = palette::RETRO_PAPER;
            colors.text = palette::RETRO_INK;
            colors.primary = palette::RETRO_ACCENT;
            Theme::custom("Retro Light".to_string(), colors)
        }
        (ThemeMode::Dark, Skin::Retro) => {
            let mut colors = Theme::Dark.palette();
            colors.background = palette::RETRO_INK;
            colors.text = palette::RETRO_PAPER;
            colors.primary = palette::RETRO_ACCENT;
            Theme::custom("Retro Dark".to_string(), colors)
        }
        (ThemeMode::Light, Skin::Default) => Theme::Light,
        (ThemeMode::Dark, Skin::Default) => Theme::Dark,
    }
}
