// SPDX-License-Identifier: MPL-2.0
//! The closed set of supported display languages.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    #[default]
    En,
    Ja,
}

/// Presentation data for a locale picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    pub locale: Locale,
    /// Name in English.
    pub name: &'static str,
    /// Name in the locale itself.
    pub native_name: &'static str,
}

pub const AVAILABLE_LOCALES: [LocaleInfo; 2] = [
    LocaleInfo {
        locale: Locale::En,
        name: "English",
        native_name: "English",
    },
    LocaleInfo {
        locale: Locale::Ja,
        name: "Japanese",
        native_name: "日本語",
    },
];

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    /// Locale used when nothing else applies.
    pub const DEFAULT: Locale = Locale::En;

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Exact match against the supported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    /// Matches the primary language subtag of a tag such as `ja-JP`,
    /// `en_US.UTF-8` or `zh-Hant-TW`. Region and script are ignored.
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        primary_subtag(tag).as_deref().and_then(Self::from_code)
    }

    pub fn info(self) -> &'static LocaleInfo {
        match self {
            Locale::En => &AVAILABLE_LOCALES[0],
            Locale::Ja => &AVAILABLE_LOCALES[1],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| Error::UnsupportedLocale(s.to_string()))
    }
}

/// Extracts the language subtag of `tag`.
///
/// Well-formed BCP 47 tags go through `unic-langid`, which also normalizes
/// case. POSIX-style values (`ja_JP.UTF-8`, `de_DE@euro`) are split by hand.
fn primary_subtag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if let Ok(langid) = tag.parse::<LanguageIdentifier>() {
        return Some(langid.language.to_string());
    }
    tag.split(['-', '_', '.', '@'])
        .next()
        .filter(|subtag| !subtag.is_empty())
        .map(str::to_string)
}
