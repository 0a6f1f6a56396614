// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and UI behavior constants.
//!
//! # Categories
//!
//! - **Publications**: ORCID endpoint, researcher id and request timeout
//! - **Poster**: zoom bounds, wheel sensitivity and click tolerance
//! - **Scrolling**: reveal threshold and back-to-top visibility

// ==========================================================================
// Publications Defaults
// ==========================================================================

/// Base URL of the ORCID public API v3.0.
pub const DEFAULT_ORCID_API_BASE: &str = "https://pub.orcid.org/v3.0";

/// Researcher whose works are listed when no id is configured.
pub const DEFAULT_ORCID_ID: &str = "0000-0002-1825-0097";

/// Surname emphasized in author lists.
pub const DEFAULT_HIGHLIGHT_SURNAME: &str = "Holik";

/// Per-request timeout for ORCID calls (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Poster Viewer Defaults
// ==========================================================================

/// Scale of an unzoomed poster.
pub const MIN_POSTER_SCALE: f32 = 1.0;

/// Maximum poster magnification.
pub const MAX_POSTER_SCALE: f32 = 3.0;

/// Scale applied when the poster image is clicked while unzoomed.
pub const CLICK_ZOOM_SCALE: f32 = 2.0;

/// Scale change per wheel line.
pub const WHEEL_LINE_STEP: f32 = 0.1;

/// Scale change per wheel pixel (trackpads report pixels).
pub const WHEEL_PIXEL_STEP: f32 = 0.0025;

/// Pointer travel (logical pixels) below which a press/release is a click.
pub const CLICK_TOLERANCE_PX: f32 = 4.0;

/// Fraction of the window the fitted poster image may occupy.
pub const POSTER_FIT_RATIO: f32 = 0.9;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Visible fraction at which a marked section is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.15;

/// Duration of the reveal fade-in (in milliseconds).
pub const REVEAL_FADE_MS: u64 = 450;

/// Scroll distance (logical pixels) after which back-to-top is shown.
pub const BACK_TO_TOP_THRESHOLD: f32 = 300.0;
