// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a personal research portfolio built with the Iced GUI framework.
//!
//! It renders a single scrolling page from a TOML site manifest, lists the
//! researcher's publications fetched from the ORCID public API, and shows
//! posters in a zoomable overlay. Light, dark and CRT themes plus a retro
//! skin are remembered across runs.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod publications;
pub mod site;
pub mod ui;

#[cfg(test)]
mod test_utils;
