//! Derived catalog lookups
//!
//! All queries return filter IDs in ascending order. The catalog is small
//! enough that each query is a linear scan.

use crate::band::{BandFilter, CalibrationLookup};
use crate::catalog::{FilterBand, FilterCatalog};

impl FilterCatalog {
    fn ids_where(&self, pred: impl Fn(&FilterBand) -> bool) -> Vec<usize> {
        self.iter()
            .filter(|(_, entry)| pred(entry))
            .map(|(id, _)| id)
            .collect()
    }

    /// Filters built for a band type
    pub fn filters_for_band(&self, band: BandFilter) -> Vec<usize> {
        self.ids_where(|e| e.band == band)
    }

    /// Filters tagged with a 3GPP/NR band number
    pub fn filters_for_lte_band(&self, lte_band: i8) -> Vec<usize> {
        self.ids_where(|e| e.lte_band == lte_band)
    }

    /// Filters calibrated from a given characteristic data table
    pub fn filters_for_calibration(&self, lookup: CalibrationLookup) -> Vec<usize> {
        self.ids_where(|e| e.calibration == lookup)
    }

    /// Filters that share a multi-filter group with `id`
    ///
    /// A group is every entry with the same band and the same
    /// `filters_per_band` count above one. Alternative builds of the same
    /// group position (e.g. a swapped-path variant) are included. Returns
    /// an empty list when `id` is not part of a group.
    pub fn filter_group(&self, id: usize) -> Vec<usize> {
        match self.entry(id) {
            Some(entry) if entry.is_partial() => self.ids_where(|e| {
                e.band == entry.band && e.filters_per_band == entry.filters_per_band
            }),
            _ => Vec::new(),
        }
    }
}
