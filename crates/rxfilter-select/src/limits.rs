//! Passband limit queries
//!
//! Used to report the frequency limits of a chosen filter. Queries never
//! fail: an ID outside the catalog reads as 0.

use rxfilter_bands::{Direction, FilterCatalog};

/// Low passband edge in dMHz of the `direction` branch of `filter_id`
///
/// With [`Direction::Unknown`] the uplink branch is used if populated,
/// otherwise the downlink branch.
pub fn low_limit(catalog: &FilterCatalog, filter_id: usize, direction: Direction) -> u16 {
    catalog
        .entry(filter_id)
        .map_or(0, |entry| entry.branch(direction).low_dmhz)
}

/// High passband edge in dMHz of the `direction` branch of `filter_id`
pub fn high_limit(catalog: &FilterCatalog, filter_id: usize, direction: Direction) -> u16 {
    catalog
        .entry(filter_id)
        .map_or(0, |entry| entry.branch(direction).high_dmhz)
}

/// Ladon hardware identifier of a catalog entry
///
/// Firmware callers only ever get an identifier back for ID 0; every other
/// ID, valid or not, reports none.
pub fn ladon_filter_id(catalog: &FilterCatalog, filter_id: usize) -> Option<u16> {
    if filter_id != 0 {
        return None;
    }
    catalog.entry(filter_id).map(|entry| entry.ladon_id)
}
