// SPDX-License-Identifier: MPL-2.0
//! Retro skin easter egg.
//!
//! The skin is independent from the theme and stored under its own key. It
//! toggles when the user types the Konami code anywhere in the window.

use crate::app::preferences::{PreferenceStore, SKIN_KEY};
use crate::ui::design_tokens::radius;
use iced::keyboard::{key::Named, Key};
use iced::Font;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Skin {
    #[default]
    Default,
    Retro,
}

impl Skin {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Skin::Default => "default",
            Skin::Retro => "retro",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(Skin::Default),
            "retro" => Some(Skin::Retro),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Skin::Default => Skin::Retro,
            Skin::Retro => Skin::Default,
        }
    }

    /// Body font for this skin.
    #[must_use]
    pub fn font(self) -> Font {
        match self {
            Skin::Default => Font::DEFAULT,
            Skin::Retro => Font::MONOSPACE,
        }
    }

    /// Corner radius for cards and buttons.
    #[must_use]
    pub fn corner_radius(self) -> f32 {
        match self {
            Skin::Default => radius::MD,
            Skin::Retro => radius::NONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkinController {
    skin: Skin,
}

impl SkinController {
    pub fn initialize(store: &dyn PreferenceStore) -> Self {
        let skin = match store.get(SKIN_KEY) {
            Some(value) => Skin::parse(&value).unwrap_or_else(|| {
                log::warn!("unknown stored skin {:?}, using default", value);
                Skin::Default
            }),
            None => Skin::Default,
        };
        Self { skin }
    }

    #[must_use]
    pub fn skin(&self) -> Skin {
        self.skin
    }

    /// Flips the skin and persists it. Returns a warning key on store failure.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> Option<String> {
        self.skin = self.skin.toggled();
        log::info!("skin set to {}", self.skin.as_str());
        store.set(SKIN_KEY, self.skin.as_str())
    }
}

/// Keys that make up the easter egg sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKey {
    Up,
    Down,
    Left,
    Right,
    B,
    A,
    Other,
}

impl SequenceKey {
    #[must_use]
    pub fn from_key(key: &Key) -> Self {
        match key.as_ref() {
            Key::Named(Named::ArrowUp) => SequenceKey::Up,
            Key::Named(Named::ArrowDown) => SequenceKey::Down,
            Key::Named(Named::ArrowLeft) => SequenceKey::Left,
            Key::Named(Named::ArrowRight) => SequenceKey::Right,
            Key::Character(c) if c.eq_ignore_ascii_case("b") => SequenceKey::B,
            Key::Character(c) if c.eq_ignore_ascii_case("a") => SequenceKey::A,
            _ => SequenceKey::Other,
        }
    }
}

const KONAMI: [SequenceKey; 10] = [
    SequenceKey::Up,
    SequenceKey::Up,
    SequenceKey::Down,
    SequenceKey::Down,
    SequenceKey::Left,
    SequenceKey::Right,
    SequenceKey::Left,
    SequenceKey::Right,
    SequenceKey::B,
    SequenceKey::A,
];

/// Matches the tail of the typed keys against the Konami code.
#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    recent: VecDeque<SequenceKey>,
}

impl KonamiDetector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one key press. Returns `true` when the sequence just completed.
    pub fn push(&mut self, key: SequenceKey) -> bool {
        if self.recent.len() == KONAMI.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key);

        if self.recent.iter().eq(KONAMI.iter()) {
            self.recent.clear();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::preferences::MemoryPreferences;

    fn feed(detector: &mut KonamiDetector, keys: &[SequenceKey]) -> bool {
        keys.iter().fold(false, |_, key| detector.push(*key))
    }

    #[test]
    fn full_sequence_triggers() {
        let mut detector = KonamiDetector::new();
        assert!(feed(&mut detector, &KONAMI));
    }

    #[test]
    fn partial_sequence_does_not_trigger() {
        let mut detector = KonamiDetector::new();
        assert!(!feed(&mut detector, &KONAMI[..9]));
    }

    #[test]
    fn extra_leading_keys_are_tolerated() {
        let mut detector = KonamiDetector::new();
        let mut keys = vec![SequenceKey::Up, SequenceKey::Other, SequenceKey::Up];
        keys.extend_from_slice(&KONAMI);
        assert!(feed(&mut detector, &keys));
    }

    #[test]
    fn interrupted_sequence_does_not_trigger() {
        let mut detector = KonamiDetector::new();
        let mut keys = KONAMI[..5].to_vec();
        keys.push(SequenceKey::Other);
        keys.extend_from_slice(&KONAMI[5..]);
        assert!(!feed(&mut detector, &keys));
    }

    #[test]
    fn sequence_can_be_entered_twice() {
        let mut detector = KonamiDetector::new();
        assert!(feed(&mut detector, &KONAMI));
        assert!(feed(&mut detector, &KONAMI));
    }

    #[test]
    fn letter_keys_are_case_insensitive() {
        assert_eq!(
            SequenceKey::from_key(&Key::Character("B".into())),
            SequenceKey::B
        );
        assert_eq!(
            SequenceKey::from_key(&Key::Character("a".into())),
            SequenceKey::A
        );
        assert_eq!(
            SequenceKey::from_key(&Key::Named(Named::ArrowUp)),
            SequenceKey::Up
        );
    }

    #[test]
    fn controller_reads_and_persists_skin() {
        let mut store = MemoryPreferences::with_entries([(SKIN_KEY, "retro")]);
        let mut controller = SkinController::initialize(&store);
        assert_eq!(controller.skin(), Skin::Retro);

        controller.toggle(&mut store);
        assert_eq!(controller.skin(), Skin::Default);
        assert_eq!(store.get(SKIN_KEY).as_deref(), Some("default"));
    }

    #[test]
    fn unknown_skin_falls_back_to_default() {
        let store = MemoryPreferences::with_entries([(SKIN_KEY, "neon")]);
        assert_eq!(SkinController::initialize(&store).skin(), Skin::Default);
    }
}
