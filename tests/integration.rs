// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::preferences::{FilePreferences, PreferenceStore, LEGACY_CRT_KEY, THEME_KEY};
use iced_folio::config::{self, Config, FetchMode, GeneralConfig, PublicationsConfig};
use iced_folio::i18n::fluent::I18n;
use iced_folio::site::{self, SectionKind};
use iced_folio::ui::skin::{Skin, SkinController};
use iced_folio::ui::theming::{ThemeController, ThemeMode};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}

#[test]
fn publication_settings_survive_save_and_load() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        publications: PublicationsConfig {
            orcid_id: Some("0000-0001-2345-6789".to_string()),
            fetch_mode: Some(FetchMode::Sequential),
            ..PublicationsConfig::default()
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.publications.orcid_id(), "0000-0001-2345-6789");
    assert_eq!(loaded.publications.fetch_mode(), FetchMode::Sequential);
}

#[test]
fn broken_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[publications\norcid_id =")
        .expect("Failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn theme_and_skin_persist_across_restarts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = Some(dir.path().to_path_buf());

    {
        let (mut store, warning) = FilePreferences::load_from(data_dir.clone());
        assert!(warning.is_none());
        let (mut theme, _) = ThemeController::initialize(&mut store);
        let mut skin = SkinController::initialize(&store);
        assert_eq!(theme.mode(), ThemeMode::Light);

        assert!(theme.toggle_crt(&mut store).is_none());
        assert!(skin.toggle(&mut store).is_none());
    }

    let (mut store, warning) = FilePreferences::load_from(data_dir);
    assert!(warning.is_none());
    let (theme, _) = ThemeController::initialize(&mut store);
    let skin = SkinController::initialize(&store);
    assert_eq!(theme.mode(), ThemeMode::Crt);
    assert_eq!(skin.skin(), Skin::Retro);
}

#[test]
fn legacy_crt_flag_is_migrated_once() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let data_dir = Some(dir.path().to_path_buf());

    {
        let (mut store, _) = FilePreferences::load_from(data_dir.clone());
        assert!(store.set(LEGACY_CRT_KEY, "on").is_none());
    }

    {
        let (mut store, _) = FilePreferences::load_from(data_dir.clone());
        let (theme, warning) = ThemeController::initialize(&mut store);
        assert!(warning.is_none());
        assert_eq!(theme.mode(), ThemeMode::Crt);
    }

    let (store, _) = FilePreferences::load_from(data_dir);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("crt"));
    assert_eq!(store.get(LEGACY_CRT_KEY), None);
}

#[test]
fn corrupt_preferences_are_reset_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("preferences.cbor"), b"\xff\x00not cbor")
        .expect("Failed to write preferences");

    let (mut store, warning) = FilePreferences::load_from(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("notification-preferences-parse-error"));

    let (theme, _) = ThemeController::initialize(&mut store);
    assert_eq!(theme.mode(), ThemeMode::Light);
}

#[test]
fn external_site_manifest_replaces_embedded_one() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        r#"
        title = "Lab page"

        [[sections]]
        id = "pubs"
        heading = "Papers"
        kind = "publications"
        "#,
    )
    .expect("Failed to write manifest");

    let (manifest, warning) = site::load(Some(&path));
    assert!(warning.is_none());
    assert_eq!(manifest.title, "Lab page");
    assert_eq!(manifest.sections[0].kind, SectionKind::Publications);
    assert!(manifest.posters.is_empty());
    assert_eq!(manifest.base_dir.as_deref(), Some(dir.path()));
}
