// SPDX-License-Identifier: MPL-2.0
//! Durable key-value media for the locale preference.

use crate::config::{self, Config};
use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A string key-value store that outlives the process.
pub trait PreferenceStorage {
    /// Returns the stored value, or `None` if absent or unreadable.
    fn read(&self, key: &str) -> Option<String>;

    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Preferences stored in the `[preferences]` table of `settings.toml`.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `settings.toml` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(config::CONFIG_FILE))
    }

    /// `settings.toml` in the resolved application config directory.
    pub fn default_location() -> Option<Self> {
        config::config_path_with_override(None).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<Config> {
        if !self.path.exists() {
            return None;
        }
        match config::load_from_path(&self.path) {
            Ok(config) => Some(config),
            Err(error) => {
                debug!(path = %self.path.display(), %error, "ignoring unreadable settings file");
                None
            }
        }
    }
}

impl PreferenceStorage for SettingsFile {
    fn read(&self, key: &str) -> Option<String> {
        self.load()?.get(key).map(str::to_string)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.load().unwrap_or_default();
        config.set(key, value);
        config::save_to_path(&config, &self.path)
    }
}

/// In-process storage. Nothing survives the process, but clones of an
/// `Rc<MemoryStorage>` share state, which is enough to simulate sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Writes `value` under `key`, logging and absorbing failures.
pub(crate) fn write_or_warn(storage: &dyn PreferenceStorage, key: &str, value: &str) {
    if let Err(error) = storage.write(key, value) {
        warn!(key, value, %error, "failed to persist preference");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOCALE_STORAGE_KEY;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn settings_file_missing_reads_none() {
        let dir = tempdir().expect("failed to create temp dir");
        let storage = SettingsFile::in_dir(dir.path());
        assert_eq!(storage.read(LOCALE_STORAGE_KEY), None);
    }

    #[test]
    fn settings_file_write_then_read() {
        let dir = tempdir().expect("failed to create temp dir");
        let storage = SettingsFile::in_dir(&dir.path().join("nested"));

        storage.write(LOCALE_STORAGE_KEY, "ja").expect("write");
        assert_eq!(storage.read(LOCALE_STORAGE_KEY), Some("ja".to_string()));
        assert!(storage.path().exists());
    }

    #[test]
    fn settings_file_write_preserves_other_keys() {
        let dir = tempdir().expect("failed to create temp dir");
        let storage = SettingsFile::in_dir(dir.path());

        storage.write("agari-other", "kept").expect("write");
        storage.write(LOCALE_STORAGE_KEY, "en").expect("write");

        assert_eq!(storage.read("agari-other"), Some("kept".to_string()));
        assert_eq!(storage.read(LOCALE_STORAGE_KEY), Some("en".to_string()));
    }

    #[test]
    fn settings_file_write_keeps_unrelated_tables() {
        let dir = tempdir().expect("failed to create temp dir");
        let storage = SettingsFile::in_dir(dir.path());
        fs::write(storage.path(), "[display]\nzoom = 2\n").expect("write file");

        storage.write(LOCALE_STORAGE_KEY, "ja").expect("write");

        let config = config::load_from_path(storage.path()).expect("load");
        assert_eq!(config.get(LOCALE_STORAGE_KEY), Some("ja"));
        let zoom = config
            .other
            .get("display")
            .and_then(|display| display.get("zoom"))
            .and_then(toml::Value::as_integer);
        assert_eq!(zoom, Some(2));
    }

    #[test]
    fn corrupt_settings_file_reads_none_and_is_replaced_on_write() {
        let dir = tempdir().expect("failed to create temp dir");
        let storage = SettingsFile::in_dir(dir.path());
        fs::write(storage.path(), "not = valid = toml").expect("write file");

        assert_eq!(storage.read(LOCALE_STORAGE_KEY), None);

        storage.write(LOCALE_STORAGE_KEY, "ja").expect("write");
        assert_eq!(storage.read(LOCALE_STORAGE_KEY), Some("ja".to_string()));
    }

    #[test]
    fn write_or_warn_absorbs_errors() {
        let dir = tempdir().expect("failed to create temp dir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").expect("write file");

        // The parent of the settings file is a regular file, so the write fails.
        let storage = SettingsFile::in_dir(&blocker);
        assert!(storage.write(LOCALE_STORAGE_KEY, "ja").is_err());
        write_or_warn(&storage, LOCALE_STORAGE_KEY, "ja");
    }

    #[test]
    fn memory_storage_counts_writes() {
        let storage = MemoryStorage::with_value(LOCALE_STORAGE_KEY, "en");
        assert_eq!(storage.read(LOCALE_STORAGE_KEY), Some("en".to_string()));
        assert_eq!(storage.write_count(), 0);

        storage.write(LOCALE_STORAGE_KEY, "ja").unwrap();
        storage.write(LOCALE_STORAGE_KEY, "ja").unwrap();
        assert_eq!(storage.write_count(), 2);
        assert_eq!(storage.read(LOCALE_STORAGE_KEY), Some("ja".to_string()));
    }
}
