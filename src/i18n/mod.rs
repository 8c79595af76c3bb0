// SPDX-License-Identifier: MPL-2.0
//! Display-language selection and translated strings.
//!
//! # Features
//!
//! - Startup locale resolution from the saved preference, then the system
//!   language, then English
//! - A reactive [`LocaleStore`] that persists every change to `settings.toml`
//! - A [`TranslationView`] that always matches the active locale
//! - The [`I18n`] façade for code that just wants to read or set the locale
//!
//! # Example
//!
//! ```no_run
//! use agari_locale::i18n::{I18n, Locale};
//!
//! let i18n = I18n::system().expect("built-in catalog loads");
//! let _sub = i18n.view().subscribe(|t| println!("{}", t.tagline));
//! i18n.set_locale(Locale::Ja);
//! assert_eq!(i18n.translations().wind_east, "東");
//! ```

pub mod accessor;
pub mod catalog;
pub mod environment;
pub mod locale;
pub mod resolver;
pub mod storage;
pub mod store;
pub mod view;
pub mod wind;

pub use accessor::I18n;
pub use catalog::{Catalog, Translations};
pub use environment::{Environment, FixedEnvironment, SystemEnvironment};
pub use locale::{Locale, LocaleInfo, AVAILABLE_LOCALES};
pub use resolver::resolve_locale;
pub use storage::{MemoryStorage, PreferenceStorage, SettingsFile};
pub use store::LocaleStore;
pub use view::TranslationView;
pub use wind::WindNames;
