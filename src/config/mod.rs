// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user settings from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[publications]` - ORCID researcher, highlighted surname, fetch strategy
//! - `[site]` - Alternate site manifest
//!
//! Theme and skin are not configured here: they are toggled in the UI and
//! kept in the preference store (see [`crate::app::preferences`]).
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI flag or `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.publications.orcid_id = Some("0000-0002-1825-0097".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// How the per-work detail requests are issued.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FetchMode {
    /// All detail requests in flight at once, results kept in summary order.
    #[default]
    Concurrent,
    /// One detail request after another.
    Sequential,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Publication list settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicationsConfig {
    /// ORCID iD of the researcher whose works are listed.
    #[serde(default = "default_orcid_id", skip_serializing_if = "Option::is_none")]
    pub orcid_id: Option<String>,

    /// Surname emphasized in author lists (case-insensitive).
    #[serde(
        default = "default_highlight_surname",
        skip_serializing_if = "Option::is_none"
    )]
    pub highlight_surname: Option<String>,

    /// ORCID API base URL.
    #[serde(default = "default_api_base", skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Detail request strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_mode: Option<FetchMode>,

    /// Per-request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for PublicationsConfig {
    fn default() -> Self {
        Self {
            orcid_id: default_orcid_id(),
            highlight_surname: default_highlight_surname(),
            api_base: default_api_base(),
            fetch_mode: Some(FetchMode::default()),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl PublicationsConfig {
    /// Effective ORCID iD; blank values fall back to the default.
    #[must_use]
    pub fn orcid_id(&self) -> &str {
        non_blank(self.orcid_id.as_deref()).unwrap_or(DEFAULT_ORCID_ID)
    }

    #[must_use]
    pub fn highlight_surname(&self) -> &str {
        non_blank(self.highlight_surname.as_deref()).unwrap_or(DEFAULT_HIGHLIGHT_SURNAME)
    }

    /// Effective API base without trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        non_blank(self.api_base.as_deref())
            .unwrap_or(DEFAULT_ORCID_API_BASE)
            .trim_end_matches('/')
    }

    #[must_use]
    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode.unwrap_or_default()
    }

    /// Request timeout clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Site content settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SiteConfig {
    /// Path to a site manifest replacing the embedded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub publications: PublicationsConfig,

    #[serde(default)]
    pub site: SiteConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_orcid_id() -> Option<String> {
    Some(DEFAULT_ORCID_ID.to_string())
}

fn default_highlight_surname() -> Option<String> {
    Some(DEFAULT_HIGHLIGHT_SURNAME.to_string())
}

fn default_api_base() -> Option<String> {
    Some(DEFAULT_ORCID_API_BASE.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to display.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            publications: PublicationsConfig {
                orcid_id: Some("0000-0001-2345-6789".to_string()),
                highlight_surname: Some("Madill".to_string()),
                api_base: Some("http://localhost:9000/v3.0".to_string()),
                fetch_mode: Some(FetchMode::Sequential),
                request_timeout_secs: Some(30),
            },
            site: SiteConfig {
                manifest: Some(PathBuf::from("/srv/site.toml")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[publications]\norcid_id = \"0000-0003-0000-0001\"\n",
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.publications.orcid_id(), "0000-0003-0000-0001");
        assert_eq!(loaded.publications.highlight_surname(), DEFAULT_HIGHLIGHT_SURNAME);
        assert_eq!(loaded.publications.api_base(), DEFAULT_ORCID_API_BASE);
        assert_eq!(loaded.general.language, None);
    }

    #[test]
    fn fetch_mode_is_kebab_case() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[publications]\nfetch_mode = \"sequential\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.publications.fetch_mode(), FetchMode::Sequential);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let publications = PublicationsConfig {
            orcid_id: Some("   ".to_string()),
            highlight_surname: Some(String::new()),
            api_base: None,
            fetch_mode: None,
            request_timeout_secs: None,
        };

        assert_eq!(publications.orcid_id(), DEFAULT_ORCID_ID);
        assert_eq!(publications.highlight_surname(), DEFAULT_HIGHLIGHT_SURNAME);
        assert_eq!(publications.api_base(), DEFAULT_ORCID_API_BASE);
        assert_eq!(publications.fetch_mode(), FetchMode::Concurrent);
        assert_eq!(
            publications.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn api_base_trailing_slash_is_trimmed() {
        let publications = PublicationsConfig {
            api_base: Some("https://example.org/v3.0/".to_string()),
            ..PublicationsConfig::default()
        };
        assert_eq!(publications.api_base(), "https://example.org/v3.0");
    }

    #[test]
    fn request_timeout_is_clamped() {
        let publications = PublicationsConfig {
            request_timeout_secs: Some(0),
            ..PublicationsConfig::default()
        };
        assert_eq!(
            publications.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );

        let publications = PublicationsConfig {
            request_timeout_secs: Some(10_000),
            ..PublicationsConfig::default()
        };
        assert_eq!(
            publications.request_timeout(),
            Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_corrupt_file_warns() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[publications\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.language, Some("en-US".to_string()));
    }
}
