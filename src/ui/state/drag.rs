// SPDX-License-Identifier: MPL-2.0
//! Press and pan tracking for the poster image.
//!
//! The press message carries no position; the first pointer position seen
//! after it becomes the origin. Touch pointers have no position between
//! contacts, so a cached one would be stale.

use crate::config::CLICK_TOLERANCE_PX;
use iced::{Point, Vector};

/// A pointer press on the poster image, until released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    /// Pan offset when the press began.
    offset: Vector,
    pans: bool,
    /// Unset until the first pointer position after the press.
    origin: Option<Point>,
    travelled: f32,
}

impl Press {
    /// Starts a press over an image panned by `offset`. When `pans` is set
    /// the press drags the image, keeping the grabbed point under the pointer.
    #[must_use]
    pub fn begin(offset: Vector, pans: bool) -> Self {
        Self {
            offset,
            pans,
            origin: None,
            travelled: 0.0,
        }
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pans
    }

    /// Records pointer movement. Returns the new pan offset when panning.
    ///
    /// The first position only anchors the press.
    pub fn moved_to(&mut self, pointer: Point) -> Option<Vector> {
        let Some(origin) = self.origin else {
            self.origin = Some(pointer);
            return None;
        };
        self.travelled = self.travelled.max(pointer.distance(origin));
        self.pans.then(|| {
            Vector::new(
                self.offset.x + pointer.x - origin.x,
                self.offset.y + pointer.y - origin.y,
            )
        })
    }

    /// Whether the press stayed within the click tolerance.
    #[must_use]
    pub fn is_click(&self) -> bool {
        self.travelled < CLICK_TOLERANCE_PX
    }
}
