//! RX Filter Band Catalog
//!
//! This crate describes the receive/transmit filters and duplexors that can
//! be fitted to the filter sites of a NESIE RF board:
//!
//! - **Catalog**: an immutable table of filter definitions addressed by
//!   filter ID, with uplink/downlink passbands in deci-MHz (dMHz)
//! - **Bands**: the closed set of band filter types and the mapping from
//!   3GPP LTE/NR band numbers onto them
//! - **Frequency math**: kHz to dMHz rounding and channel edge computation
//!
//! Site selection over a board's fitted filters lives in `rxfilter-select`.
//!
//! # Example
//!
//! ```rust
//! use rxfilter_bands::{band_to_filter_type, BandFilter, Direction, FilterCatalog};
//!
//! let catalog = FilterCatalog::standard();
//! let gsm850 = catalog.get(0x19).unwrap();
//!
//! assert_eq!(gsm850.band, band_to_filter_type(5));
//! assert_eq!(gsm850.band, BandFilter::Gsm850);
//! assert!(gsm850.covers_channel(881_500, 200, Direction::Downlink));
//! ```

pub mod band;
pub mod catalog;
pub mod error;
pub mod flags;
pub mod freq;
pub mod index;

pub use band::{band_to_filter_type, BandFilter, CalibrationLookup, MAX_LTE_BAND};
pub use catalog::{
    blocks, FilterBand, FilterCatalog, FreqRange, BOTTOM_850UL_FILTER_ID,
    NOT_FITTED_FILTER_ID, NO_FILTER_SITE_AVAILABLE, RX_FILTER_BANDS, RX_FILTER_BANDS_LEN,
    WIDEBAND_FILTER_ID,
};
pub use error::CatalogError;
pub use flags::{Direction, DirectionMask, ExtraData};
pub use freq::{channel_edges, to_deci_mhz, ChannelWindow, MAX_RF_FREQ_KHZ};
