//! Band filter types and 3GPP band mapping

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::CatalogError;

/// Highest 3GPP/NR band number with a dedicated filter type
pub const MAX_LTE_BAND: u32 = 77;

/// Logical band a catalog filter is built for
///
/// Discriminants follow the firmware's numeric band codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BandFilter {
    // Classic NESIE bands
    Cdma450 = 0,
    Iden = 2,
    Gsm850 = 4,
    Egsm900 = 6,
    Dcs1800 = 8,
    Pcs1900 = 10,
    ThreeGBand1 = 12,
    Empty = 14,

    // Covert and modified classic
    Lte7 = 16,
    Lte20 = 18,

    // Modified covert
    Lte28 = 20,
    Lte12 = 22,
    Lte13 = 24,
    Lte17 = 26,

    // Tactical TDD
    Lte40 = 28,
    Lte38 = 30,
    Lte41 = 32,

    // Additional tactical
    Lte25 = 34,
    Lte26 = 36,
    Lte71 = 38,
    N77 = 40,

    /// Catch-all for bands without a dedicated filter
    Wide = 1000,
}

impl BandFilter {
    /// Every band filter type, in firmware code order
    pub const ALL: [BandFilter; 22] = [
        BandFilter::Cdma450,
        BandFilter::Iden,
        BandFilter::Gsm850,
        BandFilter::Egsm900,
        BandFilter::Dcs1800,
        BandFilter::Pcs1900,
        BandFilter::ThreeGBand1,
        BandFilter::Empty,
        BandFilter::Lte7,
        BandFilter::Lte20,
        BandFilter::Lte28,
        BandFilter::Lte12,
        BandFilter::Lte13,
        BandFilter::Lte17,
        BandFilter::Lte40,
        BandFilter::Lte38,
        BandFilter::Lte41,
        BandFilter::Lte25,
        BandFilter::Lte26,
        BandFilter::Lte71,
        BandFilter::N77,
        BandFilter::Wide,
    ];

    /// Firmware numeric code
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Short firmware name (the `BAND_FILTER_` suffix)
    pub fn name(&self) -> &'static str {
        match self {
            BandFilter::Cdma450 => "CDMA450",
            BandFilter::Iden => "IDEN",
            BandFilter::Gsm850 => "GSM850",
            BandFilter::Egsm900 => "EGSM900",
            BandFilter::Dcs1800 => "DCS1800",
            BandFilter::Pcs1900 => "PCS1900",
            BandFilter::ThreeGBand1 => "3GBAND1",
            BandFilter::Empty => "EMPTY",
            BandFilter::Lte7 => "LTE7",
            BandFilter::Lte20 => "LTE20",
            BandFilter::Lte28 => "LTE28",
            BandFilter::Lte12 => "LTE12",
            BandFilter::Lte13 => "LTE13",
            BandFilter::Lte17 => "LTE17",
            BandFilter::Lte40 => "LTE40",
            BandFilter::Lte38 => "LTE38",
            BandFilter::Lte41 => "LTE41",
            BandFilter::Lte25 => "LTE25",
            BandFilter::Lte26 => "LTE26",
            BandFilter::Lte71 => "LTE71",
            BandFilter::N77 => "N77",
            BandFilter::Wide => "WIDE",
        }
    }

    /// Band label used by the production test station
    pub fn common_name(&self) -> &'static str {
        match self {
            BandFilter::Cdma450 => "CDMA450",
            BandFilter::Iden => "IDEN",
            BandFilter::Gsm850 => "GSM850",
            BandFilter::Egsm900 => "EGSM900",
            BandFilter::Dcs1800 => "DCS1800",
            BandFilter::Pcs1900 => "PCS1900",
            BandFilter::ThreeGBand1 => "UMTS_1",
            BandFilter::Empty => "OPEN",
            BandFilter::Lte7 => "LTE_7",
            BandFilter::Lte20 => "LTE_20",
            BandFilter::Lte28 => "LTE_28",
            BandFilter::Lte12 => "LTE_12",
            BandFilter::Lte13 => "LTE_13",
            BandFilter::Lte17 => "LTE_17",
            BandFilter::Lte40 => "LTE_40",
            BandFilter::Lte38 => "TD_2600",
            BandFilter::Lte41 => "LTE_41",
            BandFilter::Lte25 => "1900+",
            BandFilter::Lte26 => "850+",
            BandFilter::Lte71 => "LTE_71",
            BandFilter::N77 => "LTE_77",
            BandFilter::Wide => "WIDEBAND",
        }
    }

    /// Whether this is one of the generic placeholder types
    pub fn is_generic(&self) -> bool {
        matches!(self, BandFilter::Empty | BandFilter::Wide)
    }
}

impl fmt::Display for BandFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let name = upper.strip_prefix("BAND_FILTER_").unwrap_or(upper.as_str());
        BandFilter::ALL
            .iter()
            .copied()
            .find(|band| band.name() == name)
            .ok_or_else(|| CatalogError::UnknownBandName(s.to_string()))
    }
}

/// Map a 3GPP LTE or NR band number to the filter type that serves it
///
/// Total over all inputs: numbers without a dedicated filter map to
/// [`BandFilter::Wide`].
pub fn band_to_filter_type(band_number: u32) -> BandFilter {
    match band_number {
        1 => BandFilter::ThreeGBand1,
        2 => BandFilter::Pcs1900,
        3 => BandFilter::Dcs1800,
        5 => BandFilter::Gsm850,
        7 => BandFilter::Lte7,
        8 => BandFilter::Egsm900,
        9 => BandFilter::Dcs1800,
        12 => BandFilter::Lte12,
        13 => BandFilter::Lte13,
        17 => BandFilter::Lte17,
        20 => BandFilter::Lte20,
        25 => BandFilter::Lte25,
        26 => BandFilter::Lte26,
        27 => BandFilter::Iden,
        28 => BandFilter::Lte28,
        31 => BandFilter::Cdma450,
        38 => BandFilter::Lte38,
        39 => BandFilter::Lte25,
        40 => BandFilter::Lte40,
        41 => BandFilter::Lte41,
        42 | 43 | 52 | 77 | 78 => BandFilter::N77,
        71 => BandFilter::Lte71,
        other => {
            debug!("No dedicated filter for band {}, using wideband", other);
            BandFilter::Wide
        }
    }
}

/// Radio board characteristic data table used to calibrate a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalibrationLookup {
    NoLookup = -1,
    Lte7 = 0,
    Dcs1800 = 1,
    Pcs1900 = 2,
    Umts1 = 3,
    Gsm850 = 4,
    Egsm900 = 5,
    Lte20 = 6,
    Wideband = 7,
    Lte12 = 8,
    Lte13 = 9,
    Lte28A = 10,
    Lte28B = 11,
    Lte40 = 12,
}

impl CalibrationLookup {
    /// Number of real calibration tables
    pub const TABLE_COUNT: usize = 13;

    /// Table slot, or `None` for [`CalibrationLookup::NoLookup`]
    pub fn table_index(&self) -> Option<usize> {
        match self {
            CalibrationLookup::NoLookup => None,
            other => Some(*other as usize),
        }
    }
}
