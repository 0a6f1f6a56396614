// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! renders from a `ViewContext` and hands events back to `App::update`.
//!
//! # Page
//!
//! - [`navbar`] - Brand, section links, theme and CRT toggles
//! - [`sections`] - Hero and manifest sections with fade-in
//! - [`publications`] - Formatted ORCID publication list
//! - [`poster`] - Poster gallery and zoom/pan overlay
//! - [`back_to_top`] - Floating scroll-to-top button
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Scroll, history, zoom and drag state
//! - [`reveal`] - One-shot fade-in bookkeeping
//! - [`widgets`] - Custom Iced widgets (reveal probe, pan/zoom frame)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/CRT theme mode management
//! - [`skin`] - Retro skin and its key sequence
//! - [`icons`] - SVG icon loading and rendering
//! - [`notifications`] - Toast notification system for user feedback

pub mod back_to_top;
pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod poster;
pub mod publications;
pub mod reveal;
pub mod sections;
pub mod skin;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
