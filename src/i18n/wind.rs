// SPDX-License-Identifier: MPL-2.0
use super::catalog::Translations;

/// Localized names of the four seat/round winds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindNames {
    pub east: String,
    pub south: String,
    pub west: String,
    pub north: String,
}

impl From<&Translations> for WindNames {
    fn from(table: &Translations) -> Self {
        Self {
            east: table.wind_east.clone(),
            south: table.wind_south.clone(),
            west: table.wind_west.clone(),
            north: table.wind_north.clone(),
        }
    }
}
