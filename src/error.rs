// SPDX-License-Identifier: MPL-2.0
use crate::i18n::Locale;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// A translation table could not be loaded or parsed.
    Catalog(String),
    /// The catalog has no table for a locale that the store can hold.
    UnmappedLocale(Locale),
    /// A raw locale code outside the supported set.
    UnsupportedLocale(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::UnmappedLocale(locale) => {
                write!(f, "No translation table for locale '{}'", locale.code())
            }
            Error::UnsupportedLocale(code) => write!(f, "Unsupported locale: {}", code),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
