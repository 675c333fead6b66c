//! Board variants and fitted filter profiles
//!
//! A board profile records which catalog filter is fitted at each filter
//! site of a board. Profiles are stored as JSON:
//!
//! ```json
//! { "name": "bench-7", "variant": "nesie2", "fitted_filter_ids": [21, 22, 23] }
//! ```
//!
//! Sites beyond the listed IDs are padded with [`UNPOPULATED_SITE`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rxfilter_bands::{BandFilter, Direction};

use crate::error::BoardError;
use crate::selector::{FilterSelector, Selection};

/// Filter ID marking a site with nothing fitted (beyond the catalog)
pub const UNPOPULATED_SITE: u8 = 0xFF;

/// Hardware variant of an RF board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardVariant {
    #[serde(rename = "nesie")]
    Nesie,
    #[serde(rename = "mini_nesie_784")]
    MiniNesie784,
    #[serde(rename = "mini_nesie_872")]
    MiniNesie872,
    #[serde(rename = "nesie2")]
    Nesie2,
    #[serde(rename = "tactical")]
    Tactical,
}

impl BoardVariant {
    pub const ALL: [BoardVariant; 5] = [
        BoardVariant::Nesie,
        BoardVariant::MiniNesie784,
        BoardVariant::MiniNesie872,
        BoardVariant::Nesie2,
        BoardVariant::Tactical,
    ];

    /// Number of receive filter sites
    pub fn rx_site_count(&self) -> usize {
        match self {
            BoardVariant::Nesie => 14,
            BoardVariant::MiniNesie784 => 8,
            BoardVariant::MiniNesie872 => 11,
            BoardVariant::Nesie2 => 16,
            BoardVariant::Tactical => 12,
        }
    }

    /// Number of transmit filter sites; Tactical transmit filters are
    /// drawn from the same catalog
    pub fn tx_site_count(&self) -> usize {
        match self {
            BoardVariant::Tactical => 12,
            _ => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardVariant::Nesie => "nesie",
            BoardVariant::MiniNesie784 => "mini_nesie_784",
            BoardVariant::MiniNesie872 => "mini_nesie_872",
            BoardVariant::Nesie2 => "nesie2",
            BoardVariant::Tactical => "tactical",
        }
    }
}

impl fmt::Display for BoardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardVariant {
    type Err = BoardError;

    /// Accepts the variant name with any case and with or without `_`/`-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        BoardVariant::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().replace('_', "") == squashed)
            .ok_or_else(|| BoardError::UnknownVariant(s.to_string()))
    }
}

/// Parse one filter ID, decimal or `0x` hex
pub fn parse_filter_id(s: &str) -> Result<u8, BoardError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|_| BoardError::InvalidFilterId(s.to_string()))
}

/// Catalog ID fitted at each site, indexed by site
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FittedFilterIds(Vec<u8>);

impl FittedFilterIds {
    pub fn new(ids: Vec<u8>) -> Self {
        Self(ids)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ID fitted at `site`
    pub fn get(&self, site: usize) -> Option<u8> {
        self.0.get(site).copied()
    }

    /// Extend with unpopulated sites up to `site_count`
    fn pad_to(&mut self, site_count: usize) {
        if self.0.len() < site_count {
            self.0.resize(site_count, UNPOPULATED_SITE);
        }
    }
}

impl From<Vec<u8>> for FittedFilterIds {
    fn from(ids: Vec<u8>) -> Self {
        Self(ids)
    }
}

impl FromStr for FittedFilterIds {
    type Err = BoardError;

    /// Comma-separated IDs, e.g. `21,0x16,23`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_filter_id)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for FittedFilterIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.0.iter().map(|id| format!("{:#04x}", id)).collect();
        write!(f, "{}", ids.join(","))
    }
}

/// Profile file layout
#[derive(Debug, Deserialize)]
struct BoardProfileFile {
    #[serde(default)]
    name: Option<String>,
    variant: BoardVariant,
    fitted_filter_ids: FittedFilterIds,
}

/// A board variant together with its fitted filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardProfileFile")]
pub struct BoardProfile {
    pub name: String,
    pub variant: BoardVariant,
    #[serde(rename = "fitted_filter_ids")]
    fitted: FittedFilterIds,
}

impl TryFrom<BoardProfileFile> for BoardProfile {
    type Error = BoardError;

    fn try_from(file: BoardProfileFile) -> Result<Self, Self::Error> {
        let name = file.name.unwrap_or_else(|| file.variant.to_string());
        BoardProfile::new(name, file.variant, file.fitted_filter_ids)
    }
}

impl BoardProfile {
    /// Build a profile, padding `fitted` to the variant's site count
    pub fn new(
        name: impl Into<String>,
        variant: BoardVariant,
        fitted: FittedFilterIds,
    ) -> Result<Self, BoardError> {
        let mut profile = Self {
            name: name.into(),
            variant,
            fitted: FittedFilterIds::default(),
        };
        profile.replace_fitted(fitted)?;
        Ok(profile)
    }

    /// Parse a profile from JSON text
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a profile from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let profile = Self::from_json(&json)?;
        info!(
            "Loaded board profile '{}' ({}, {} sites)",
            profile.name,
            profile.variant,
            profile.site_count()
        );
        Ok(profile)
    }

    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Receive filter sites on this board
    pub fn site_count(&self) -> usize {
        self.variant.rx_site_count()
    }

    pub fn fitted(&self) -> &FittedFilterIds {
        &self.fitted
    }

    /// Swap in a new set of fitted filters after the board is reconfigured
    pub fn replace_fitted(&mut self, mut fitted: FittedFilterIds) -> Result<(), BoardError> {
        let max = self.site_count();
        if fitted.len() > max {
            return Err(BoardError::TooManySites {
                variant: self.variant,
                given: fitted.len(),
                max,
            });
        }

        fitted.pad_to(max);
        debug!("Board '{}' fitted filters: {}", self.name, fitted);
        self.fitted = fitted;
        Ok(())
    }

    /// Frequency-only selection over this board's sites
    pub fn select_by_frequency(
        &self,
        selector: &FilterSelector,
        freq_khz: u32,
        bandwidth_khz: u32,
    ) -> Option<Selection> {
        selector.select_by_frequency(
            self.fitted.as_slice(),
            self.site_count(),
            freq_khz,
            bandwidth_khz,
        )
    }

    /// Band-constrained selection over this board's sites
    pub fn select_by_band_and_frequency(
        &self,
        selector: &FilterSelector,
        freq_khz: u32,
        bandwidth_khz: u32,
        band: BandFilter,
        hint: Direction,
    ) -> Option<Selection> {
        selector.select_by_band_and_frequency(
            self.fitted.as_slice(),
            self.site_count(),
            freq_khz,
            bandwidth_khz,
            band,
            hint,
        )
    }
}
