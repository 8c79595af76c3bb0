// SPDX-License-Identifier: MPL-2.0
//! The translation table for the active locale.

use super::catalog::{Catalog, Translations};
use super::locale::Locale;
use super::store::LocaleStore;
use crate::error::Result;
use crate::reactive::{Derived, Subscription};
use std::rc::Rc;

/// Read-only projection `catalog[store.get()]`.
///
/// Holds no table of its own; every read and every notification looks the
/// table up for the locale the store holds at that moment.
#[derive(Clone)]
pub struct TranslationView {
    derived: Derived<Locale, Rc<Translations>>,
}

impl TranslationView {
    /// Fails with [`crate::error::Error::UnmappedLocale`] if `catalog` lacks
    /// a table for any supported locale.
    pub fn new(store: &LocaleStore, catalog: Catalog) -> Result<Self> {
        catalog.ensure_complete()?;
        let derived = Derived::new(store.cell().clone(), move |locale: &Locale| {
            catalog.table(*locale)
        });
        Ok(Self { derived })
    }

    pub fn get(&self) -> Rc<Translations> {
        self.derived.get()
    }

    /// Calls `callback` now with the current table and after every store
    /// change.
    pub fn subscribe(&self, callback: impl Fn(&Translations) + 'static) -> Subscription {
        self.derived.subscribe(move |table: &Rc<Translations>| callback(&**table))
    }
}

impl std::fmt::Debug for TranslationView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationView")
            .field("derived", &self.derived)
            .finish()
    }
}
