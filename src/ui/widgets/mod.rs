// SPDX-License-Identifier: MPL-2.0
//! Custom widgets for the portfolio page.

pub mod pan_zoom;
pub mod reveal_probe;

pub use pan_zoom::{pan_zoom, PanZoom};
pub use reveal_probe::{reveal_probe, RevealProbe};
