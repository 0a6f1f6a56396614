// SPDX-License-Identifier: MPL-2.0
//! Page scroll state: offset, viewport bounds and section positions.

use crate::config::BACK_TO_TOP_THRESHOLD;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ScrollState {
    offset: AbsoluteOffset,
    /// Bounds of the page scrollable in window coordinates.
    bounds: Option<Rectangle>,
    /// Layout y of the page content, in window coordinates.
    page_top: Option<f32>,
    /// Layout y of each measured section, in window coordinates.
    section_tops: HashMap<String, f32>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
            page_top: None,
            section_tops: HashMap::new(),
        }
    }
}

impl ScrollState {
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) {
        self.bounds = Some(bounds);
        self.offset = offset;
    }

    #[must_use]
    pub fn offset(&self) -> AbsoluteOffset {
        self.offset
    }

    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.offset.y > BACK_TO_TOP_THRESHOLD
    }

    /// Records where the page content starts.
    pub fn measure_page(&mut self, layout_top: f32) {
        self.page_top = Some(layout_top);
    }

    /// Records where a section sits in the page layout.
    pub fn measure_section(&mut self, id: &str, layout_top: f32) {
        self.section_tops.insert(id.to_string(), layout_top);
    }

    /// Scroll offset that brings section `id` to the top of the page viewport.
    #[must_use]
    pub fn section_target(&self, id: &str) -> Option<AbsoluteOffset> {
        let top = *self.section_tops.get(id)?;
        let origin = self
            .page_top
            .or(self.bounds.map(|bounds| bounds.y))
            .unwrap_or(0.0);
        Some(AbsoluteOffset {
            x: 0.0,
            y: (top - origin).max(0.0),
        })
    }
}
