// SPDX-License-Identifier: MPL-2.0
//! UI state kept apart from the widgets that render it.

pub mod drag;
pub mod history;
pub mod scroll;
pub mod zoom;

pub use drag::Press;
pub use history::{History, Route};
pub use scroll::ScrollState;
pub use zoom::PosterScale;
