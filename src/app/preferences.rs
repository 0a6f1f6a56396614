// SPDX-License-Identifier: MPL-2.0
//! Key-value preference store surviving restarts.
//!
//! UI toggles (theme, retro skin) persist through the [`PreferenceStore`]
//! trait. The on-disk implementation keeps a CBOR map of string to string in
//! `preferences.cbor` inside the app data directory and writes through on
//! every change. [`MemoryPreferences`] backs tests and sessions where the data
//! directory is unavailable.
//!
//! Store failures never abort the caller: operations return an optional i18n
//! warning key, like [`crate::config::load`].

use super::paths;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Preference file name within the app data directory.
const PREFERENCES_FILE: &str = "preferences.cbor";

/// Key holding the theme (`light`, `dark` or `crt`).
pub const THEME_KEY: &str = "theme";

/// Key holding the skin (`default` or `retro`).
pub const SKIN_KEY: &str = "skin";

/// Former boolean-like CRT key, migrated into [`THEME_KEY`] on load.
pub const LEGACY_CRT_KEY: &str = "crt-mode";

/// Abstract string-to-string preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`. Returns a warning key if it could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> Option<String>;

    /// Removes `key`. Returns a warning key if the removal could not be persisted.
    fn remove(&mut self, key: &str) -> Option<String>;
}

/// In-memory store, lost on exit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-filled with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Option<String> {
        self.values.insert(key.to_string(), value.to_string());
        None
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key);
        None
    }
}

/// CBOR-file backed store.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Loads preferences from the default data directory.
    ///
    /// Returns a tuple of (store, optional_warning). A missing file yields an
    /// empty store without warning; an unreadable one yields an empty store
    /// and a warning key.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads preferences from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(PREFERENCES_FILE);
            path
        });

        let Some(file_path) = path.as_ref() else {
            log::warn!("no data directory available, preferences will not persist");
            return (
                Self {
                    path,
                    values: BTreeMap::new(),
                },
                Some("notification-preferences-path-error".to_string()),
            );
        };

        if !file_path.exists() {
            return (
                Self {
                    path,
                    values: BTreeMap::new(),
                },
                None,
            );
        }

        let (values, warning) = match fs::File::open(file_path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(values) => (values, None),
                Err(err) => {
                    log::warn!("discarding corrupt {}: {}", file_path.display(), err);
                    (
                        BTreeMap::new(),
                        Some("notification-preferences-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                log::warn!("cannot open {}: {}", file_path.display(), err);
                (
                    BTreeMap::new(),
                    Some("notification-preferences-read-error".to_string()),
                )
            }
        };

        (Self { path, values }, warning)
    }

    fn flush(&self) -> Option<String> {
        let Some(path) = self.path.as_ref() else {
            return Some("notification-preferences-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("cannot create {}: {}", parent.display(), err);
                return Some("notification-preferences-write-error".to_string());
            }
        }

        match fs::File::create(path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(&self.values, BufWriter::new(file)) {
                    log::warn!("cannot write {}: {}", path.display(), err);
                    return Some("notification-preferences-write-error".to_string());
                }
                None
            }
            Err(err) => {
                log::warn!("cannot create {}: {}", path.display(), err);
                Some("notification-preferences-write-error".to_string())
            }
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Option<String> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return None;
        }
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        if self.values.remove(key).is_none() {
            return None;
        }
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_set_get_remove() {
        let mut store = MemoryPreferences::new();
        assert_eq!(store.get(THEME_KEY), None);

        assert!(store.set(THEME_KEY, "dark").is_none());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        assert!(store.remove(THEME_KEY).is_none());
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn missing_file_gives_empty_store_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (store, warning) = FilePreferences::load_from(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn values_survive_reload() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut store, _) = FilePreferences::load_from(Some(base_dir.clone()));
        assert!(store.set(THEME_KEY, "crt").is_none());
        assert!(store.set(SKIN_KEY, "retro").is_none());

        let (reloaded, warning) = FilePreferences::load_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(reloaded.get(THEME_KEY).as_deref(), Some("crt"));
        assert_eq!(reloaded.get(SKIN_KEY).as_deref(), Some("retro"));
    }

    #[test]
    fn removal_is_persisted() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut store, _) = FilePreferences::load_from(Some(base_dir.clone()));
        store.set(LEGACY_CRT_KEY, "on");
        store.remove(LEGACY_CRT_KEY);

        let (reloaded, _) = FilePreferences::load_from(Some(base_dir));
        assert_eq!(reloaded.get(LEGACY_CRT_KEY), None);
    }

    #[test]
    fn corrupt_file_warns_and_starts_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(PREFERENCES_FILE), b"\xff\xff not cbor")
            .expect("failed to write file");

        let (store, warning) = FilePreferences::load_from(Some(temp_dir.path().to_path_buf()));

        assert_eq!(
            warning.as_deref(),
            Some("notification-preferences-parse-error")
        );
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn with_entries_prefills_values() {
        let store = MemoryPreferences::with_entries([(THEME_KEY, "dark"), (SKIN_KEY, "retro")]);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.get(SKIN_KEY).as_deref(), Some("retro"));
    }
}
