// SPDX-License-Identifier: MPL-2.0
//! Platform signals consulted during locale resolution.

use crate::config::ENV_HEADLESS;
use crate::paths;
use std::path::PathBuf;

/// Facts about the execution context.
pub trait Environment {
    /// Whether persistence and language detection are available.
    fn is_capable(&self) -> bool;

    /// The platform's reported UI language tag, e.g. `"ja-JP"`.
    fn language_tag(&self) -> Option<String>;
}

/// The real process environment.
///
/// Capable when a config directory can be resolved and `AGARI_HEADLESS`
/// is not set to a truthy value.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    config_dir: Option<PathBuf>,
    headless: bool,
}

impl SystemEnvironment {
    pub fn detect() -> Self {
        let headless = std::env::var(ENV_HEADLESS)
            .map(|value| is_truthy(&value))
            .unwrap_or(false);
        Self {
            config_dir: paths::config_dir(),
            headless,
        }
    }

    pub fn config_dir(&self) -> Option<&PathBuf> {
        self.config_dir.as_ref()
    }
}

impl Environment for SystemEnvironment {
    fn is_capable(&self) -> bool {
        self.config_dir.is_some() && !self.headless
    }

    fn language_tag(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// An environment with fixed answers, for tests and embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub capable: bool,
    pub language_tag: Option<String>,
}

impl FixedEnvironment {
    /// A capable environment reporting `language_tag`.
    pub fn new(language_tag: Option<&str>) -> Self {
        Self {
            capable: true,
            language_tag: language_tag.map(str::to_string),
        }
    }

    /// A non-interactive environment with no persistence or detection.
    pub fn headless() -> Self {
        Self::default()
    }
}

impl Environment for FixedEnvironment {
    fn is_capable(&self) -> bool {
        self.capable
    }

    fn language_tag(&self) -> Option<String> {
        self.language_tag.clone()
    }
}
