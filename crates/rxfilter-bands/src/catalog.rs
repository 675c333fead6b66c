//! Filter and duplexor catalog
//!
//! The catalog is an immutable table indexed by filter ID. Boards report
//! which ID is fitted at each physical filter site, and external code refers
//! to entries by index, so entries must never be reordered. New filters are
//! appended.
//!
//! Each table row carries a trailing `// 0xHH` annotation with its hardware
//! ID. Tooling that mirrors the table relies on that layout.

use crate::band::{BandFilter, BandFilter as Band, CalibrationLookup, CalibrationLookup as Cal};
use crate::error::CatalogError;
use crate::flags::{Direction, DirectionMask, ExtraData};
use crate::freq::channel_edges;

/// Site selection found nothing usable (integer encoding of `None`)
pub const NO_FILTER_SITE_AVAILABLE: i32 = -1;
/// Placeholder fitted at empty filter sites
pub const NOT_FITTED_FILTER_ID: u8 = 0;
/// The wideband option; only ever chosen as a last resort
pub const WIDEBAND_FILTER_ID: u8 = 1;
/// Bottom-of-band GSM850 uplink filter fitted alongside an LTE20 uplink filter
pub const BOTTOM_850UL_FILTER_ID: u8 = 20;

/// First ID of each block of related filters
pub mod blocks {
    /// Generics: empty and wideband
    pub const GENERIC: u8 = 0;
    /// Classic NESIE standard filters
    pub const CLASSIC_STANDARD: u8 = 2;
    /// Classic NESIE additional LTE filters (7/20)
    pub const CLASSIC_LTE: u8 = 16;
    /// Covert NESIE standard duplexors
    pub const COVERT_STANDARD: u8 = 21;
    /// Covert NESIE LTE28 A/B duplexors
    pub const COVERT_LTE_1: u8 = 28;
    /// Flight/NESIE2 standard filters
    pub const NESIE2_STANDARD: u8 = 30;
    /// Covert NESIE LTE12/13/17 duplexors
    pub const COVERT_LTE_2: u8 = 44;
    /// Tactical NESIE standard duplexors
    pub const TACTICAL_STANDARD: u8 = 47;
    /// Covert NESIE LTE13 with swapped paths
    pub const COVERT_LTE_3: u8 = 54;
    /// Tactical NESIE LTE40
    pub const TACTICAL_LTE_1: u8 = 55;
    /// Covert NESIE LTE40 and swapped LTE28A
    pub const COVERT_LTE_4: u8 = 56;
}

/// Inclusive passband of one filter branch in dMHz
///
/// `(0, 0)` marks a branch that is not present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FreqRange {
    pub low_dmhz: u16,
    pub high_dmhz: u16,
}

impl FreqRange {
    pub const UNUSED: FreqRange = FreqRange::new(0, 0);

    pub const fn new(low_dmhz: u16, high_dmhz: u16) -> Self {
        Self {
            low_dmhz,
            high_dmhz,
        }
    }

    /// A branch with either bound at zero is treated as absent
    pub const fn is_unused(&self) -> bool {
        self.low_dmhz == 0 || self.high_dmhz == 0
    }

    pub fn low_mhz(&self) -> f64 {
        f64::from(self.low_dmhz) / 10.0
    }

    pub fn high_mhz(&self) -> f64 {
        f64::from(self.high_dmhz) / 10.0
    }

    pub fn low_hz(&self) -> u64 {
        u64::from(self.low_dmhz) * 100_000
    }

    pub fn high_hz(&self) -> u64 {
        u64::from(self.high_dmhz) * 100_000
    }

    /// Passband centre, rounded down
    pub fn centre_dmhz(&self) -> u32 {
        (u32::from(self.low_dmhz) + u32::from(self.high_dmhz)) / 2
    }

    /// Whether a single dMHz value lies in the passband
    pub fn contains_dmhz(&self, dmhz: u32) -> bool {
        !self.is_unused() && self.contains_window(dmhz, dmhz)
    }

    /// Whether the whole window `[low_dmhz, high_dmhz]` lies in the passband
    pub fn contains_window(&self, low_dmhz: u32, high_dmhz: u32) -> bool {
        u32::from(self.low_dmhz) <= low_dmhz && high_dmhz <= u32::from(self.high_dmhz)
    }
}

/// One catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterBand {
    /// Uplink (reverse) branch
    pub uplink: FreqRange,
    /// Downlink (forward) branch
    pub downlink: FreqRange,
    /// Which arms are wired
    pub direction_mask: DirectionMask,
    /// Ladon firmware hardware identifier, 0 if unused
    pub ladon_id: u16,
    /// Band this filter is built for
    pub band: BandFilter,
    /// 3GPP/NR band number, -1 if not applicable
    pub lte_band: i8,
    /// Position within a group of filters that jointly cover one band
    pub filter_no: u8,
    /// Size of that group
    pub filters_per_band: u8,
    pub extra_data: ExtraData,
    pub calibration: CalibrationLookup,
}

impl FilterBand {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        uplink: (u16, u16),
        downlink: (u16, u16),
        direction_mask: DirectionMask,
        ladon_id: u16,
        band: BandFilter,
        lte_band: i8,
        filter_no: u8,
        filters_per_band: u8,
        extra_data: ExtraData,
        calibration: CalibrationLookup,
    ) -> Self {
        Self {
            uplink: FreqRange::new(uplink.0, uplink.1),
            downlink: FreqRange::new(downlink.0, downlink.1),
            direction_mask,
            ladon_id,
            band,
            lte_band,
            filter_no,
            filters_per_band,
            extra_data,
            calibration,
        }
    }

    /// Branch for a direction
    ///
    /// With no direction context the entry is presumed to be a single
    /// filter: the uplink branch if it is populated, else the downlink one.
    pub fn branch(&self, direction: Direction) -> &FreqRange {
        match direction {
            Direction::Uplink => &self.uplink,
            Direction::Downlink => &self.downlink,
            Direction::Unknown if self.uplink.high_dmhz != 0 => &self.uplink,
            Direction::Unknown => &self.downlink,
        }
    }

    /// Whether the whole channel fits inside the branch for `direction`
    pub fn covers_channel(&self, freq_khz: u32, bandwidth_khz: u32, direction: Direction) -> bool {
        let range = self.branch(direction);
        if range.is_unused() {
            return false;
        }
        let (low, high) = channel_edges(freq_khz, bandwidth_khz);
        range.contains_window(low, high)
    }

    /// Both arms present (FDD duplexor)
    pub fn is_duplexor(&self) -> bool {
        !self.uplink.is_unused() && !self.downlink.is_unused()
    }

    /// Part of a group of filters that jointly cover one band
    pub fn is_partial(&self) -> bool {
        self.filters_per_band > 1
    }
}

/// Immutable, index-addressed filter catalog
#[derive(Debug, Clone, Copy)]
pub struct FilterCatalog {
    entries: &'static [FilterBand],
}

impl FilterCatalog {
    /// Wrap a static table
    pub const fn new(entries: &'static [FilterBand]) -> Self {
        Self { entries }
    }

    /// The production catalog
    pub fn standard() -> Self {
        Self::new(&RX_FILTER_BANDS)
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a filter ID
    pub fn get(&self, index: usize) -> Result<&'static FilterBand, CatalogError> {
        self.entries.get(index).ok_or(CatalogError::OutOfRange {
            index,
            len: self.entries.len(),
        })
    }

    /// Entry for a filter ID, or `None` when nothing usable is at that ID
    pub fn entry(&self, index: usize) -> Option<&'static FilterBand> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &'static [FilterBand] {
        self.entries
    }

    /// `(filter ID, entry)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &'static FilterBand)> {
        self.entries.iter().enumerate()
    }
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Number of rows in [`RX_FILTER_BANDS`]
pub const RX_FILTER_BANDS_LEN: usize = 68;

const UL: DirectionMask = DirectionMask::UPLINK;
const DL: DirectionMask = DirectionMask::DOWNLINK;
const BOTH: DirectionMask = DirectionMask::BOTH;
const NONE: ExtraData = ExtraData::NONE;
const FORREV: ExtraData = ExtraData::FORREV;
const SWAP: ExtraData = ExtraData::SWAP_FOR_AND_REV;

/// The production filter table; also used for transmit filters on Tactical
#[rustfmt::skip]
pub static RX_FILTER_BANDS: [FilterBand; RX_FILTER_BANDS_LEN] = [
    //             Uplink (dMHz)     Downlink (dMHz)   Mask  Ladon  Band              LTE  #  of  Extra   Calibration
    // Block 0: generic
    FilterBand::new((    0,     0), (    0,     0), BOTH,  0, Band::Empty,       -1, 1, 1, NONE,   Cal::NoLookup),  // 0x00 not fitted
    FilterBand::new((  100, 63000), (    0,     0), UL,    1, Band::Wide,         0, 1, 1, NONE,   Cal::Wideband),  // 0x01 wideband, must stay at WIDEBAND_FILTER_ID

    // Block 1: classic NESIE standard filters
    FilterBand::new(( 4510,  4590), (    0,     0), UL,    0, Band::Cdma450,     31, 1, 1, NONE,   Cal::NoLookup),  // 0x02 UL 450, reverse band is 8 MHz, forward 7
    FilterBand::new((    0,     0), ( 4600,  4670), DL,    0, Band::Cdma450,     31, 1, 1, NONE,   Cal::NoLookup),  // 0x03 DL 450
    FilterBand::new(( 8060,  8210), (    0,     0), UL,   11, Band::Iden,        27, 1, 1, NONE,   Cal::NoLookup),  // 0x04 UL 800 SMR (iDEN)
    FilterBand::new((    0,     0), ( 8510,  8660), DL,   10, Band::Iden,        27, 1, 1, NONE,   Cal::NoLookup),  // 0x05 DL 800 SMR (iDEN)
    FilterBand::new(( 8240,  8490), (    0,     0), UL,    5, Band::Gsm850,       5, 1, 1, NONE,   Cal::NoLookup),  // 0x06 UL 850 GSM
    FilterBand::new((    0,     0), ( 8690,  8940), DL,    4, Band::Gsm850,       5, 1, 1, NONE,   Cal::NoLookup),  // 0x07 DL 850 GSM
    FilterBand::new(( 8800,  9150), (    0,     0), UL,    3, Band::Egsm900,      8, 1, 1, NONE,   Cal::NoLookup),  // 0x08 UL 900 EGSM
    FilterBand::new((    0,     0), ( 9250,  9600), DL,    2, Band::Egsm900,      8, 1, 1, NONE,   Cal::NoLookup),  // 0x09 DL 900 EGSM
    FilterBand::new((17100, 17850), (    0,     0), UL,    7, Band::Dcs1800,      3, 1, 1, NONE,   Cal::NoLookup),  // 0x0a UL 1800 DCS
    FilterBand::new((    0,     0), (18050, 18800), DL,    6, Band::Dcs1800,      3, 1, 1, NONE,   Cal::NoLookup),  // 0x0b DL 1800 DCS
    FilterBand::new((18500, 19100), (    0,     0), UL,    9, Band::Pcs1900,      2, 1, 1, NONE,   Cal::NoLookup),  // 0x0c UL 1900 PCS
    FilterBand::new((    0,     0), (19300, 19900), DL,    8, Band::Pcs1900,      2, 1, 1, NONE,   Cal::NoLookup),  // 0x0d DL 1900 PCS
    FilterBand::new((19200, 19800), (    0,     0), UL,   13, Band::ThreeGBand1,  1, 1, 1, NONE,   Cal::NoLookup),  // 0x0e UL 2100
    FilterBand::new((    0,     0), (21100, 21700), DL,   12, Band::ThreeGBand1,  1, 1, 1, NONE,   Cal::NoLookup),  // 0x0f DL 2100

    // Block 2: classic NESIE additional LTE filters
    FilterBand::new(( 8320,  8620), (    0,     0), UL,   19, Band::Lte20,       20, 1, 1, NONE,   Cal::NoLookup),  // 0x10 UL 800-DD, uplink above downlink
    FilterBand::new((    0,     0), ( 7910,  8210), DL,   18, Band::Lte20,       20, 1, 1, NONE,   Cal::NoLookup),  // 0x11 DL 800-DD
    FilterBand::new((25000, 25700), (    0,     0), UL,   17, Band::Lte7,         7, 1, 1, NONE,   Cal::NoLookup),  // 0x12 UL 2600
    FilterBand::new((    0,     0), (26200, 26900), DL,   16, Band::Lte7,         7, 1, 1, NONE,   Cal::NoLookup),  // 0x13 DL 2600
    FilterBand::new(( 8240,  8319), (    0,     0), UL,    5, Band::Gsm850,       5, 1, 1, NONE,   Cal::NoLookup),  // 0x14 UL 850 GSM below LTE20 UL, must stay at BOTTOM_850UL_FILTER_ID

    // Block 3: covert NESIE standard duplexors
    FilterBand::new((25000, 25700), (26200, 26900), BOTH,  0, Band::Lte7,         7, 1, 1, NONE,   Cal::Lte7),      // 0x15 UL/DL 2600
    FilterBand::new((17100, 17850), (18050, 18800), BOTH,  0, Band::Dcs1800,      3, 1, 1, NONE,   Cal::Dcs1800),   // 0x16 UL/DL 1800 DCS
    FilterBand::new((18500, 19100), (19300, 19900), BOTH,  0, Band::Pcs1900,      2, 1, 1, NONE,   Cal::Pcs1900),   // 0x17 UL/DL 1900 PCS
    FilterBand::new((19200, 20100), (21100, 22000), BOTH,  0, Band::ThreeGBand1,  1, 1, 1, NONE,   Cal::Umts1),     // 0x18 UL/DL 2100
    FilterBand::new(( 8240,  8490), ( 8690,  8940), BOTH,  0, Band::Gsm850,       5, 1, 1, NONE,   Cal::Gsm850),    // 0x19 UL/DL 850 GSM
    FilterBand::new(( 8800,  9150), ( 9250,  9600), BOTH,  0, Band::Egsm900,      8, 1, 1, NONE,   Cal::Egsm900),   // 0x1A UL/DL 900 EGSM
    FilterBand::new(( 8320,  8620), ( 7910,  8210), BOTH,  0, Band::Lte20,       20, 1, 1, NONE,   Cal::Lte20),     // 0x1B UL/DL 800-DD

    // Block 4: covert LTE28, two duplexors each covering 2/3 of the band
    FilterBand::new(( 7030,  7330), ( 7580,  7880), BOTH,  0, Band::Lte28,       28, 1, 2, NONE,   Cal::NoLookup),  // 0x1C UL/DL 700 APT lower
    FilterBand::new(( 7180,  7480), ( 7730,  8030), BOTH,  0, Band::Lte28,       28, 2, 2, NONE,   Cal::Lte28B),    // 0x1D UL/DL 700 APT upper

    // Block 5: flight/NESIE2 standard filters
    FilterBand::new((    0,     0), ( 8690,  8940), DL,    0, Band::Gsm850,       5, 1, 1, NONE,   Cal::NoLookup),  // 0x1E DL 850 GSM
    FilterBand::new(( 8240,  8490), (    0,     0), UL,    0, Band::Gsm850,       5, 1, 1, NONE,   Cal::NoLookup),  // 0x1F UL 850 GSM
    FilterBand::new((    0,     0), ( 9250,  9600), DL,    0, Band::Egsm900,      8, 1, 1, NONE,   Cal::NoLookup),  // 0x20 DL 900 EGSM
    FilterBand::new(( 8800,  9150), (    0,     0), UL,    0, Band::Egsm900,      8, 1, 1, NONE,   Cal::NoLookup),  // 0x21 UL 900 EGSM
    FilterBand::new((    0,     0), (18050, 18800), DL,    0, Band::Dcs1800,      3, 1, 1, NONE,   Cal::NoLookup),  // 0x22 DL 1800 DCS
    FilterBand::new((17100, 17850), (    0,     0), UL,    0, Band::Dcs1800,      3, 1, 1, NONE,   Cal::NoLookup),  // 0x23 UL 1800 DCS
    FilterBand::new((    0,     0), (19300, 19900), DL,    0, Band::Pcs1900,      2, 1, 1, NONE,   Cal::NoLookup),  // 0x24 DL 1900 PCS
    FilterBand::new((18500, 19100), (    0,     0), UL,    0, Band::Pcs1900,      2, 1, 1, NONE,   Cal::NoLookup),  // 0x25 UL 1900 PCS
    FilterBand::new((    0,     0), (21100, 22000), DL,    0, Band::ThreeGBand1,  1, 1, 1, NONE,   Cal::NoLookup),  // 0x26 DL 2100
    FilterBand::new((19200, 20100), (    0,     0), UL,    0, Band::ThreeGBand1,  1, 1, 1, NONE,   Cal::NoLookup),  // 0x27 UL 2100
    FilterBand::new((    0,     0), (26200, 26900), DL,    0, Band::Lte7,         7, 1, 1, NONE,   Cal::NoLookup),  // 0x28 DL 2600
    FilterBand::new((25000, 25700), (    0,     0), UL,    0, Band::Lte7,         7, 1, 1, NONE,   Cal::NoLookup),  // 0x29 UL 2600
    FilterBand::new((    0,     0), ( 7910,  8210), DL,    0, Band::Lte20,       20, 1, 1, NONE,   Cal::NoLookup),  // 0x2A DL 800-DD
    FilterBand::new(( 8320,  8620), (    0,     0), UL,    0, Band::Lte20,       20, 1, 1, NONE,   Cal::NoLookup),  // 0x2B UL 800-DD

    // Block 6: covert LTE duplexors, 2nd tranche
    FilterBand::new(( 6980,  7160), ( 7280,  7460), BOTH,  0, Band::Lte12,       12, 1, 1, NONE,   Cal::Lte12),     // 0x2C UL/DL lower SMH (blocks A-C)
    FilterBand::new(( 7770,  7870), ( 7460,  7560), BOTH,  0, Band::Lte13,       13, 1, 1, NONE,   Cal::Lte13),     // 0x2D UL/DL upper SMH (block C)
    FilterBand::new(( 7040,  7160), ( 7340,  7460), BOTH,  0, Band::Lte17,       17, 1, 1, NONE,   Cal::NoLookup),  // 0x2E UL/DL lower SMH (blocks B-C)

    // Block 7: tactical NESIE standard duplexors
    FilterBand::new((25000, 25700), (26200, 26900), BOTH,  0, Band::Lte7,         7, 1, 1, NONE,   Cal::NoLookup),  // 0x2F UL/DL 2600, DUP300 B8659
    FilterBand::new(( 8320,  8620), ( 7910,  8210), BOTH,  0, Band::Lte20,       20, 1, 1, FORREV, Cal::NoLookup),  // 0x30 UL/DL 800-DD, DUP301 B8642, F/R line high for forward
    FilterBand::new(( 8240,  8490), ( 8690,  8940), BOTH,  0, Band::Gsm850,       5, 1, 1, NONE,   Cal::NoLookup),  // 0x31 UL/DL 850 GSM, DUP302 B8626
    FilterBand::new(( 8800,  9150), ( 9250,  9600), BOTH,  0, Band::Egsm900,      8, 1, 1, NONE,   Cal::NoLookup),  // 0x32 UL/DL 900 EGSM, FIL300 B8515
    FilterBand::new((17100, 17850), (18050, 18800), BOTH,  0, Band::Dcs1800,      3, 1, 1, NONE,   Cal::NoLookup),  // 0x33 UL/DL 1800 DCS, FIL301 B8088
    FilterBand::new((18500, 19100), (19300, 19900), BOTH,  0, Band::Pcs1900,      2, 1, 1, NONE,   Cal::NoLookup),  // 0x34 UL/DL 1900 PCS, FIL302 B8078
    FilterBand::new((19200, 20100), (21100, 22000), BOTH,  0, Band::ThreeGBand1,  1, 1, 1, NONE,   Cal::NoLookup),  // 0x35 UL/DL 2100, DUP303 B8550

    // Block 8: covert LTE13 with forward and reverse swapped
    FilterBand::new(( 7770,  7870), ( 7460,  7560), BOTH,  0, Band::Lte13,       13, 1, 1, SWAP,   Cal::NoLookup),  // 0x36 UL/DL upper SMH (block C)

    // Block 9: tactical TDD LTE40, uplink arm only connected
    FilterBand::new((23000, 24000), (    0,     0), UL,    0, Band::Lte40,       40, 1, 1, NONE,   Cal::NoLookup),  // 0x37 TDD, Qorvo 885069 BAW

    // Block 10: covert TDD LTE40 and swapped LTE28A
    FilterBand::new((23000, 24000), (    0,     0), UL,    0, Band::Lte40,       40, 1, 1, NONE,   Cal::Lte40),     // 0x38 TDD, Qorvo 885069 BAW
    FilterBand::new(( 7030,  7330), ( 7580,  7880), BOTH,  0, Band::Lte28,       28, 1, 2, SWAP,   Cal::Lte28A),    // 0x39 UL/DL 700 APT lower, 856 sub-assembly B8540

    // Block 11: tactical duplexors and TDD single filters, 3rd tranche
    FilterBand::new((18500, 19200), (19300, 19950), BOTH,  0, Band::Lte25,       25, 1, 1, NONE,   Cal::NoLookup),  // 0x3A UL/DL extended PCS1900, TF0136A
    FilterBand::new(( 8140,  8490), ( 8590,  8940), BOTH,  0, Band::Lte26,       26, 1, 1, NONE,   Cal::NoLookup),  // 0x3B UL/DL extended GSM850, TF0137A
    FilterBand::new((25700, 26200), (    0,     0), UL,    0, Band::Lte38,       38, 1, 1, NONE,   Cal::NoLookup),  // 0x3C TDD, Qorvo 885026 SAW
    FilterBand::new((24960, 26900), (    0,     0), UL,    0, Band::Lte41,       41, 1, 1, NONE,   Cal::NoLookup),  // 0x3D TDD, TA2326C SAW
    FilterBand::new(( 6630,  6980), ( 6170,  6520), BOTH,  0, Band::Lte71,       71, 1, 1, NONE,   Cal::NoLookup),  // 0x3E UL/DL 600, SAYRL634
    FilterBand::new((33000, 42000), (    0,     0), UL,    0, Band::N77,         77, 1, 1, NONE,   Cal::NoLookup),  // 0x3F TDD NR77

    // Block 12: covert LTE20 replacement for 0x1B, TF0168B with swapped paths
    FilterBand::new(( 8320,  8620), ( 7910,  8210), BOTH,  0, Band::Lte20,       20, 1, 1, SWAP,   Cal::Lte20),     // 0x40 UL/DL 800-DD

    // Block 13: tactical LTE20 replacement for 0x30, TF0168B
    FilterBand::new(( 8320,  8620), ( 7910,  8210), BOTH,  0, Band::Lte20,       20, 1, 1, NONE,   Cal::NoLookup),  // 0x41 UL/DL 800-DD

    // Block 14: tactical full-band LTE28, SAYRH725
    FilterBand::new(( 7040,  7480), ( 7580,  8030), BOTH,  0, Band::Lte28,       28, 1, 1, NONE,   Cal::NoLookup),  // 0x42 UL/DL 700 APT

    // Block 15: covert full-band LTE28, SAYRH725
    FilterBand::new(( 7040,  7480), ( 7580,  8030), BOTH,  0, Band::Lte28,       28, 1, 1, NONE,   Cal::NoLookup),  // 0x43 UL/DL 700 APT
];
