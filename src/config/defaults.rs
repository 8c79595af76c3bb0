// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and persistence.

// ==========================================================================
// Settings File
// ==========================================================================

/// Name of the settings file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Namespaced key under which the locale preference is persisted.
pub const LOCALE_STORAGE_KEY: &str = "agari-locale";

// ==========================================================================
// Environment
// ==========================================================================

/// Environment variable that marks the process as non-interactive.
///
/// When set to a truthy value, persistence and language detection are
/// treated as unavailable.
pub const ENV_HEADLESS: &str = "AGARI_HEADLESS";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(!CONFIG_FILE.is_empty());
    assert!(!LOCALE_STORAGE_KEY.is_empty());
};
