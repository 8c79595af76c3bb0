// SPDX-License-Identifier: MPL-2.0
//! Startup locale resolution.

use super::environment::Environment;
use super::locale::Locale;
use super::storage::PreferenceStorage;
use crate::config::LOCALE_STORAGE_KEY;
use tracing::debug;

/// Computes the initial locale.
///
/// Priority:
/// 1. Restricted environment: the default locale.
/// 2. The persisted preference, if it names a supported locale.
/// 3. The primary subtag of the environment's language tag, if supported.
/// 4. The default locale.
///
/// Never fails; unreadable or unsupported inputs fall through to the next
/// step.
pub fn resolve_locale(storage: &dyn PreferenceStorage, environment: &dyn Environment) -> Locale {
    if !environment.is_capable() {
        debug!(locale = %Locale::DEFAULT, "restricted environment, using default locale");
        return Locale::DEFAULT;
    }

    if let Some(locale) = persisted_locale(storage) {
        debug!(%locale, "using persisted locale");
        return locale;
    }

    if let Some(locale) = detected_locale(environment) {
        debug!(%locale, "using detected locale");
        return locale;
    }

    debug!(locale = %Locale::DEFAULT, "no usable locale signal, using default");
    Locale::DEFAULT
}

fn persisted_locale(storage: &dyn PreferenceStorage) -> Option<Locale> {
    let stored = storage.read(LOCALE_STORAGE_KEY)?;
    let locale = Locale::from_code(&stored);
    if locale.is_none() {
        debug!(value = %stored, "ignoring unsupported persisted locale");
    }
    locale
}

fn detected_locale(environment: &dyn Environment) -> Option<Locale> {
    let tag = environment.language_tag()?;
    Locale::from_language_tag(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::environment::FixedEnvironment;
    use crate::i18n::storage::MemoryStorage;

    fn stored(code: &str) -> MemoryStorage {
        MemoryStorage::with_value(LOCALE_STORAGE_KEY, code)
    }

    #[test]
    fn persisted_wins_over_detected() {
        let locale = resolve_locale(&stored("ja"), &FixedEnvironment::new(Some("en-US")));
        assert_eq!(locale, Locale::Ja);
    }

    #[test]
    fn detected_used_without_persisted_value() {
        let locale = resolve_locale(&MemoryStorage::new(), &FixedEnvironment::new(Some("ja-JP")));
        assert_eq!(locale, Locale::Ja);
    }

    #[test]
    fn unsupported_detected_language_falls_back_to_default() {
        let locale = resolve_locale(&MemoryStorage::new(), &FixedEnvironment::new(Some("fr-FR")));
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn missing_signals_fall_back_to_default() {
        let locale = resolve_locale(&MemoryStorage::new(), &FixedEnvironment::new(None));
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn invalid_persisted_value_is_treated_as_absent() {
        for bad in ["fr", "JA", "ja-JP", "", "日本語"] {
            let locale = resolve_locale(&stored(bad), &FixedEnvironment::new(Some("ja-JP")));
            assert_eq!(locale, Locale::Ja, "persisted {bad:?} should be ignored");
        }
    }

    #[test]
    fn restricted_environment_short_circuits() {
        let environment = FixedEnvironment {
            capable: false,
            language_tag: Some("ja-JP".to_string()),
        };
        assert_eq!(resolve_locale(&stored("ja"), &environment), Locale::En);
    }

    #[test]
    fn resolution_does_not_write() {
        let storage = MemoryStorage::new();
        let _ = resolve_locale(&storage, &FixedEnvironment::new(Some("ja")));
        assert_eq!(storage.write_count(), 0);
        assert_eq!(storage.read(LOCALE_STORAGE_KEY), None);
    }
}
