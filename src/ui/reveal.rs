// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal state for sections marked to fade in.
//!
//! A section is revealed the first time its probe reports enough of it in
//! view. The reveal is never undone; later scroll positions do not matter.

use crate::config::REVEAL_FADE_MS;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const FADE: Duration = Duration::from_millis(REVEAL_FADE_MS);

#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed_at: HashMap<String, Instant>,
}

impl RevealState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` revealed at `now`. Returns `false` if it already was.
    pub fn reveal(&mut self, id: &str, now: Instant) -> bool {
        if self.revealed_at.contains_key(id) {
            return false;
        }
        log::debug!("section {} revealed", id);
        self.revealed_at.insert(id.to_string(), now);
        true
    }

    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed_at.contains_key(id)
    }

    /// Opacity of a marked section: 0 until revealed, then linear to 1.
    #[must_use]
    pub fn opacity(&self, id: &str, now: Instant) -> f32 {
        match self.revealed_at.get(id) {
            Some(start) => fade_progress(now.saturating_duration_since(*start)),
            None => 0.0,
        }
    }

    /// Whether any section is still mid-fade.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed_at
            .values()
            .any(|start| now.saturating_duration_since(*start) < FADE)
    }
}

fn fade_progress(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() / FADE.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn unrevealed_section_is_transparent() {
        let state = RevealState::new();
        assert!(!state.is_revealed("about"));
        assert_abs_diff_eq!(state.opacity("about", Instant::now()), 0.0);
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut state = RevealState::new();
        let start = Instant::now();

        assert!(state.reveal("about", start));
        assert!(!state.reveal("about", start + Duration::from_secs(5)));
        assert!(state.is_revealed("about"));
        // The second call must not restart the fade.
        assert_abs_diff_eq!(state.opacity("about", start + FADE), 1.0);
    }

    #[test]
    fn opacity_ramps_over_fade_duration() {
        let mut state = RevealState::new();
        let start = Instant::now();
        state.reveal("research", start);

        assert_abs_diff_eq!(state.opacity("research", start), 0.0);
        let halfway = state.opacity("research", start + FADE / 2);
        assert_abs_diff_eq!(halfway, 0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(state.opacity("research", start + FADE * 2), 1.0);
    }

    #[test]
    fn animating_only_during_fade() {
        let mut state = RevealState::new();
        let start = Instant::now();
        assert!(!state.is_animating(start));

        state.reveal("about", start);
        assert!(state.is_animating(start + Duration::from_millis(100)));
        assert!(!state.is_animating(start + FADE));
    }
}
