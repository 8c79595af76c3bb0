// SPDX-License-Identifier: MPL-2.0
//! Translation tables and the catalog mapping each locale to its table.
//!
//! The built-in tables live in `assets/i18n/<code>.toml` and are embedded
//! at compile time. Every key is required and unknown keys are rejected, so
//! a table that drifts from the others fails to load instead of showing a
//! blank label.

use super::locale::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

macro_rules! translation_table {
    ($($(#[$doc:meta])* $field:ident => $key:literal,)+) => {
        /// Every user-facing string for one locale.
        #[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct Translations {
            $(
                $(#[$doc])*
                #[serde(rename = $key)]
                pub $field: String,
            )+
        }

        impl Translations {
            /// All keys, in declaration order.
            pub const KEYS: &'static [&'static str] = &[$($key),+];

            /// Looks a string up by its key name (e.g. `"windEast"`).
            pub fn get(&self, key: &str) -> Option<&str> {
                match key {
                    $($key => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }
        }
    };
}

translation_table! {
    // Header
    tagline => "tagline",
    // Loading/error states
    loading_calculator => "loadingCalculator",
    failed_to_load => "failedToLoad",
    // Hand builder
    build_your_hand => "buildYourHand",
    clear => "clear",
    add_meld => "addMeld",
    chi => "chi",
    pon => "pon",
    open_kan => "openKan",
    closed_kan => "closedKan",
    // Meld builder
    building_chi => "buildingChi",
    building_pon => "buildingPon",
    building_open_kan => "buildingOpenKan",
    building_closed_kan => "buildingClosedKan",
    hint_chi => "hintChi",
    hint_pon => "hintPon",
    hint_kan => "hintKan",
    cancel => "cancel",
    confirm_add_meld => "confirmAddMeld",
    called_melds => "calledMelds",
    // Hand display
    your_hand => "yourHand",
    select_winning_tile_hint => "selectWinningTileHint",
    win_badge => "winBadge",
    // Shanten
    complete => "complete",
    tenpai => "tenpai",
    shanten => "shanten",
    // Dora
    dora_indicators => "doraIndicators",
    dora => "dora",
    ura_dora => "uraDora",
    add_button => "addButton",
    akadora_in_hand => "akadoraInHand",
    // Results
    results => "results",
    calculating => "calculating",
    inferred_winning_tile => "inferredWinningTile",
    han => "han",
    fu => "fu",
    pts => "pts",
    all => "all",
    dealer => "dealer",
    /// Dealer label shown next to the payment split.
    dealer_oya => "dealerOya",
    yaku => "yaku",
    ura => "ura",
    aka => "aka",
    fu_breakdown => "fuBreakdown",
    fu_base => "fuBase",
    fu_menzen_ron => "fuMenzenRon",
    fu_tsumo => "fuTsumo",
    fu_melds => "fuMelds",
    fu_pair => "fuPair",
    fu_wait => "fuWait",
    fu_total => "fuTotal",
    structure => "structure",
    enter_complete_hand => "enterCompleteHand",
    // Options
    options => "options",
    win_type => "winType",
    ron => "ron",
    tsumo => "tsumo",
    winds => "winds",
    round => "round",
    seat => "seat",
    riichi => "riichi",
    open_hand_notice => "openHandNotice",
    double_riichi => "doubleRiichi",
    ippatsu => "ippatsu",
    situational => "situational",
    haitei => "haitei",
    houtei => "houtei",
    rinshan_kaihou => "rinshanKaihou",
    chankan => "chankan",
    first_turn_yakuman => "firstTurnYakuman",
    tenhou => "tenhou",
    chiihou => "chiihou",
    calculate_score => "calculateScore",
    // Footer
    footer_powered_by => "footerPoweredBy",
    footer_description => "footerDescription",
    select_tile => "selectTile",
    // Wind names
    wind_east => "windEast",
    wind_south => "windSouth",
    wind_west => "windWest",
    wind_north => "windNorth",
    language => "language",
}

impl Translations {
    /// Parses a table from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Catalog(e.to_string()))
    }

    /// Iterates `(key, value)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::KEYS
            .iter()
            .filter_map(move |key| self.get(key).map(|value| (*key, value)))
    }
}

/// Immutable mapping from locale to translation table.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Locale, Rc<Translations>>,
}

impl Catalog {
    /// An empty catalog. Use [`Catalog::insert`] to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the tables bundled with the crate, one per supported locale.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        for locale in Locale::ALL {
            let filename = format!("{}.toml", locale.code());
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::Catalog(format!("missing embedded table {}", filename)))?;
            let source = std::str::from_utf8(file.data.as_ref())
                .map_err(|e| Error::Catalog(format!("{}: {}", filename, e)))?;
            let table = Translations::from_toml_str(source)
                .map_err(|e| Error::Catalog(format!("{}: {}", filename, e)))?;
            catalog.insert(locale, table);
        }
        Ok(catalog)
    }

    /// Builds a catalog from explicit tables.
    pub fn from_tables(tables: impl IntoIterator<Item = (Locale, Translations)>) -> Self {
        let mut catalog = Self::new();
        for (locale, table) in tables {
            catalog.insert(locale, table);
        }
        catalog
    }

    pub fn insert(&mut self, locale: Locale, table: Translations) {
        self.tables.insert(locale, Rc::new(table));
    }

    pub fn lookup(&self, locale: Locale) -> Result<Rc<Translations>> {
        self.tables
            .get(&locale)
            .cloned()
            .ok_or(Error::UnmappedLocale(locale))
    }

    /// Checks that every supported locale has a table.
    pub fn ensure_complete(&self) -> Result<()> {
        match Locale::ALL
            .into_iter()
            .find(|locale| !self.tables.contains_key(locale))
        {
            Some(missing) => Err(Error::UnmappedLocale(missing)),
            None => Ok(()),
        }
    }

    /// Lookup for callers that rely on [`Catalog::ensure_complete`] having
    /// passed.
    ///
    /// # Panics
    ///
    /// Panics naming the locale if it has no table. That can only happen
    /// when a caller skipped the completeness check, which is a bug.
    pub(crate) fn table(&self, locale: Locale) -> Rc<Translations> {
        match self.lookup(locale) {
            Ok(table) => table,
            Err(error) => panic!("translation lookup failed: {}", error),
        }
    }
}
