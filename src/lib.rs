// SPDX-License-Identifier: MPL-2.0
//! `agari_locale` manages the display language of the Agari riichi mahjong
//! calculator.
//!
//! It resolves the starting locale, persists the user's choice across
//! sessions, and exposes the matching translation table as a reactive value.

#![doc(html_root_url = "https://docs.rs/agari_locale/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod reactive;
