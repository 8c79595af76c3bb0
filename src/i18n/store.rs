// SPDX-License-Identifier: MPL-2.0
//! The observable holder of the active locale.

use super::environment::Environment;
use super::locale::Locale;
use super::resolver::resolve_locale;
use super::storage::{write_or_warn, PreferenceStorage};
use crate::config::LOCALE_STORAGE_KEY;
use crate::reactive::{Subscription, Writable};
use std::rc::Rc;
use tracing::debug;

/// Sole owner of the active locale and sole writer of the persisted
/// preference.
///
/// Every mutation persists the new value first, then updates the cell and
/// notifies subscribers in registration order. Cloning yields another
/// handle to the same store.
#[derive(Clone, Debug)]
pub struct LocaleStore {
    cell: Writable<Locale>,
}

impl LocaleStore {
    /// Creates a store starting at `initial`.
    ///
    /// With `persistence_enabled` false, mutations skip the storage write.
    pub fn new(
        initial: Locale,
        storage: Rc<dyn PreferenceStorage>,
        persistence_enabled: bool,
    ) -> Self {
        let cell = Writable::with_effect(initial, move |locale: &Locale| {
            if persistence_enabled {
                write_or_warn(storage.as_ref(), LOCALE_STORAGE_KEY, locale.code());
            }
        });
        Self { cell }
    }

    /// Resolves the initial locale from `storage` and `environment`, then
    /// creates a store that persists to `storage` when the environment
    /// allows it.
    pub fn resolve(storage: Rc<dyn PreferenceStorage>, environment: &dyn Environment) -> Self {
        let initial = resolve_locale(storage.as_ref(), environment);
        Self::new(initial, storage, environment.is_capable())
    }

    pub fn get(&self) -> Locale {
        self.cell.get()
    }

    /// Persists and publishes `locale`. Setting the current value again
    /// still persists and notifies.
    pub fn set(&self, locale: Locale) {
        debug!(%locale, "setting active locale");
        self.cell.set(locale);
    }

    /// Applies `f` to the current locale and commits the result the same
    /// way as [`LocaleStore::set`].
    ///
    /// From inside a subscriber, `f` runs after the current round and sees
    /// the locale committed by any change queued before it.
    pub fn update(&self, f: impl FnOnce(Locale) -> Locale + 'static) {
        self.cell.update(move |locale| {
            let next = f(*locale);
            debug!(from = %locale, to = %next, "updating active locale");
            next
        });
    }

    /// Calls `callback` now with the active locale and after every change.
    pub fn subscribe(&self, callback: impl Fn(Locale) + 'static) -> Subscription {
        self.cell.subscribe(move |locale| callback(*locale))
    }

    pub(crate) fn cell(&self) -> &Writable<Locale> {
        &self.cell
    }
}
