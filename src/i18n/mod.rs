// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! locale is resolved from the `--lang` flag, then `settings.toml`, then the
//! OS locale, falling back to `en-US`.

pub mod fluent;
