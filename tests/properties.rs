// SPDX-License-Identifier: MPL-2.0
use agari_locale::config::LOCALE_STORAGE_KEY;
use agari_locale::i18n::{
    resolve_locale, FixedEnvironment, Locale, LocaleStore, MemoryStorage, PreferenceStorage,
};
use proptest::prelude::*;
use std::rc::Rc;

fn any_locale() -> impl Strategy<Value = Locale> {
    prop::sample::select(Locale::ALL.to_vec())
}

fn language_tag() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just("en".to_string()),
        Just("ja".to_string()),
        "[a-z]{2}(-[A-Z]{2})?",
        "[a-zA-Z_.@-]{0,12}",
    ])
}

proptest! {
    #[test]
    fn persisted_locale_always_wins(persisted in any_locale(), tag in language_tag()) {
        let storage = MemoryStorage::with_value(LOCALE_STORAGE_KEY, persisted.code());
        let environment = FixedEnvironment::new(tag.as_deref());
        prop_assert_eq!(resolve_locale(&storage, &environment), persisted);
    }

    #[test]
    fn region_suffix_is_ignored(detected in any_locale(), region in "[A-Z]{2}") {
        let tag = format!("{}-{}", detected.code(), region);
        let environment = FixedEnvironment::new(Some(&tag));
        prop_assert_eq!(resolve_locale(&MemoryStorage::new(), &environment), detected);
    }

    #[test]
    fn resolution_always_yields_supported_locale(
        persisted in prop::option::of(".{0,8}"),
        tag in language_tag(),
        capable in any::<bool>(),
    ) {
        let storage = match &persisted {
            Some(value) => MemoryStorage::with_value(LOCALE_STORAGE_KEY, value),
            None => MemoryStorage::new(),
        };
        let environment = FixedEnvironment { capable, language_tag: tag };
        let locale = resolve_locale(&storage, &environment);
        prop_assert!(Locale::ALL.contains(&locale));
        if !capable {
            prop_assert_eq!(locale, Locale::DEFAULT);
        }
    }

    #[test]
    fn next_session_resolves_last_set(sequence in prop::collection::vec(any_locale(), 1..8)) {
        let storage = Rc::new(MemoryStorage::new());
        let store = LocaleStore::resolve(
            Rc::clone(&storage) as Rc<dyn PreferenceStorage>,
            &FixedEnvironment::new(Some("fr-FR")),
        );
        for locale in &sequence {
            store.set(*locale);
        }

        let last = *sequence.last().unwrap();
        let next_session = resolve_locale(storage.as_ref(), &FixedEnvironment::new(Some("fr-FR")));
        prop_assert_eq!(next_session, last);
        prop_assert_eq!(storage.write_count(), sequence.len());
    }
}
