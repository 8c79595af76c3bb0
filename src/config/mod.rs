// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! Preferences are flat string values keyed by namespaced names under a
//! single `[preferences]` table:
//!
//! ```toml
//! [preferences]
//! agari-locale = "ja"
//! ```
//!
//! Other top-level tables are kept as-is across a load and save.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `AGARI_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use agari_locale::config::{self, LOCALE_STORAGE_KEY};
//! use std::path::Path;
//!
//! let path = Path::new("settings.toml");
//! let mut config = config::load_from_path(path).expect("Failed to load config");
//! config.set(LOCALE_STORAGE_KEY, "ja");
//! config::save_to_path(&config, path).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,

    /// Tables written by other parts of the application.
    #[serde(flatten)]
    pub other: toml::Table,
}

impl Config {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.preferences.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.preferences.insert(key.to_string(), value.to_string());
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => return (Config::default(), Some(error.to_string())),
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
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let mut config = Config::default();
        config.set(LOCALE_STORAGE_KEY, "ja");
        config.set("agari-other", "value");

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.get(LOCALE_STORAGE_KEY), Some("ja"));
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn saved_file_uses_preferences_table() {
        let mut config = Config::default();
        config.set(LOCALE_STORAGE_KEY, "en");

        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        save_to_path(&config, &config_path).expect("save");

        let content = fs::read_to_string(&config_path).expect("read");
        assert!(content.contains("[preferences]"));
        assert!(content.contains("agari-locale = \"en\""));
    }

    #[test]
    fn unrelated_tables_survive_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[display]\nzoom = 2\n\n[preferences]\nagari-locale = \"en\"\n",
        )
        .expect("write file");

        let mut config = load_from_path(&config_path).expect("load");
        config.set(LOCALE_STORAGE_KEY, "ja");
        save_to_path(&config, &config_path).expect("save");

        let reloaded = load_from_path(&config_path).expect("reload");
        assert_eq!(reloaded.get(LOCALE_STORAGE_KEY), Some("ja"));
        let display = reloaded.other.get("display").and_then(toml::Value::as_table);
        assert_eq!(
            display.and_then(|table| table.get("zoom")).and_then(toml::Value::as_integer),
            Some(2)
        );
        assert!(!reloaded.other.contains_key("preferences"));
    }

    #[test]
    fn empty_file_loads_as_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("write file");

        let loaded = load_from_path(&config_path).expect("empty file is valid toml");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_to_path_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.set(LOCALE_STORAGE_KEY, "ja");
        save_to_path(&config, &base_dir.join(CONFIG_FILE)).expect("save should succeed");

        assert!(base_dir.join("settings.toml").exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded.get(LOCALE_STORAGE_KEY), Some("ja"));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert_eq!(config, Config::default());
    }
}
