// SPDX-License-Identifier: MPL-2.0
//! Synchronous façade over the locale store and translation view.

use super::catalog::{Catalog, Translations};
use super::environment::{Environment, SystemEnvironment};
use super::locale::Locale;
use super::storage::{MemoryStorage, PreferenceStorage, SettingsFile};
use super::store::LocaleStore;
use super::view::TranslationView;
use super::wind::WindNames;
use crate::error::{Error, Result};
use std::rc::Rc;
use tracing::info;

/// Entry point for code outside the subscription graph.
///
/// Every call delegates to the [`LocaleStore`] or [`TranslationView`], so
/// reads agree with what reactive subscribers observe and writes persist
/// exactly as [`LocaleStore::set`] does.
#[derive(Debug, Clone)]
pub struct I18n {
    store: LocaleStore,
    view: TranslationView,
    catalog: Catalog,
}

impl I18n {
    pub fn new(store: LocaleStore, catalog: Catalog) -> Result<Self> {
        let view = TranslationView::new(&store, catalog.clone())?;
        Ok(Self {
            store,
            view,
            catalog,
        })
    }

    /// Resolves the starting locale from `storage` and `environment`.
    pub fn from_environment(
        storage: Rc<dyn PreferenceStorage>,
        environment: &dyn Environment,
        catalog: Catalog,
    ) -> Result<Self> {
        Self::new(LocaleStore::resolve(storage, environment), catalog)
    }

    /// Builds the application instance: built-in catalog, settings file in
    /// the config directory, and the platform language.
    ///
    /// In a restricted environment preferences are kept in memory only.
    pub fn system() -> Result<Self> {
        let environment = SystemEnvironment::detect();
        let storage: Rc<dyn PreferenceStorage> = match SettingsFile::default_location() {
            Some(file) if environment.is_capable() => Rc::new(file),
            _ => Rc::new(MemoryStorage::new()),
        };
        let i18n = Self::from_environment(storage, &environment, Catalog::builtin()?)?;
        info!(locale = %i18n.locale(), "locale initialized");
        Ok(i18n)
    }

    pub fn locale(&self) -> Locale {
        self.store.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.store.set(locale);
    }

    /// Parses `code` and applies it with [`I18n::set_locale`].
    pub fn set_locale_code(&self, code: &str) -> Result<Locale> {
        let locale = Locale::from_code(code)
            .ok_or_else(|| Error::UnsupportedLocale(code.to_string()))?;
        self.set_locale(locale);
        Ok(locale)
    }

    pub fn translations(&self) -> Rc<Translations> {
        self.view.get()
    }

    /// Looks up one string in the active table by key name.
    pub fn tr(&self, key: &str) -> Option<String> {
        self.translations().get(key).map(str::to_string)
    }

    /// Wind names for `locale`, or for the active locale when `None`.
    pub fn wind_names(&self, locale: Option<Locale>) -> WindNames {
        let locale = locale.unwrap_or_else(|| self.locale());
        WindNames::from(self.catalog.table(locale).as_ref())
    }

    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    pub fn view(&self) -> &TranslationView {
        &self.view
    }
}
