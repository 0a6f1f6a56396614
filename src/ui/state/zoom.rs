// SPDX-License-Identifier: MPL-2.0
//! Poster zoom scale.

pub use crate::config::{
    CLICK_ZOOM_SCALE, MAX_POSTER_SCALE, MIN_POSTER_SCALE, WHEEL_LINE_STEP, WHEEL_PIXEL_STEP,
};
use iced::mouse::ScrollDelta;

/// Poster magnification, guaranteed to be within 1.0–3.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosterScale(f32);

impl PosterScale {
    /// Creates a scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        Self(scale.clamp(MIN_POSTER_SCALE, MAX_POSTER_SCALE))
    }

    /// Scale used when an unzoomed poster is clicked.
    #[must_use]
    pub fn click_zoom() -> Self {
        Self::new(CLICK_ZOOM_SCALE)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the poster is shown at its fitted size.
    #[must_use]
    pub fn is_unzoomed(self) -> bool {
        self.0 <= MIN_POSTER_SCALE
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_POSTER_SCALE
    }

    /// Applies a wheel movement; scrolling up zooms in.
    #[must_use]
    pub fn scrolled(self, delta: ScrollDelta) -> Self {
        Self::new(self.0 + wheel_step(delta))
    }
}

impl Default for PosterScale {
    fn default() -> Self {
        Self(MIN_POSTER_SCALE)
    }
}

/// Scale change for one wheel event.
#[must_use]
pub fn wheel_step(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => y * WHEEL_LINE_STEP,
        ScrollDelta::Pixels { y, .. } => y * WHEEL_PIXEL_STEP,
    }
}
