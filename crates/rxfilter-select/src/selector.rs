//! Filter site selection
//!
//! Given the filter IDs fitted at each site of a board, the selector picks
//! the site whose filter passes the whole requested channel and whose
//! passband centre is closest to the channel centre. The wideband filter
//! never wins on closeness and is only used when nothing else fits.
//!
//! Scans run in site order and a candidate replaces the current best only
//! on a strictly smaller offset, so the lowest site wins ties.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use rxfilter_bands::{
    BandFilter, ChannelWindow, Direction, ExtraData, FilterBand, FilterCatalog, FreqRange,
    NO_FILTER_SITE_AVAILABLE, WIDEBAND_FILTER_ID,
};

use crate::direction::{hint_branch, resolve_direction};

/// Outcome of a successful selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Physical site index on the board
    pub site: usize,
    /// Catalog ID fitted at that site
    pub filter_id: u8,
    /// Direction to drive, after any forward/reverse swap
    pub direction: Direction,
    /// Flags of the chosen catalog entry
    pub extra_data: ExtraData,
}

impl Selection {
    /// Apply the forward/reverse swap of the chosen entry
    fn resolved(self) -> Self {
        Self {
            direction: resolve_direction(self.extra_data, self.direction),
            ..self
        }
    }

    /// Site index as the firmware's signed encoding
    pub fn site_code(selection: Option<&Selection>) -> i32 {
        selection
            .and_then(|s| i32::try_from(s.site).ok())
            .unwrap_or(NO_FILTER_SITE_AVAILABLE)
    }
}

/// Running minimum over candidate offsets
#[derive(Debug)]
struct BestCandidate<T> {
    best: Option<T>,
    offset: u32,
}

impl<T> BestCandidate<T> {
    fn new() -> Self {
        Self {
            best: None,
            offset: u32::MAX,
        }
    }

    /// Keep `candidate` if it is strictly closer than the current best
    fn offer(&mut self, candidate: T, offset: u32) -> bool {
        if offset < self.offset {
            self.best = Some(candidate);
            self.offset = offset;
            true
        } else {
            false
        }
    }

    fn into_inner(self) -> Option<T> {
        self.best
    }
}

/// Offset of `range` from the window centre, if it passes the whole window
fn passing_offset(range: &FreqRange, window: &ChannelWindow) -> Option<u32> {
    if range.is_unused() || !range.contains_window(window.low_dmhz, window.high_dmhz) {
        return None;
    }
    Some(window.offset_from(range.centre_dmhz()))
}

/// Selects filter sites against a catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterSelector {
    catalog: FilterCatalog,
}

impl FilterSelector {
    pub fn new(catalog: FilterCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FilterCatalog {
        &self.catalog
    }

    /// Select a site by frequency alone
    ///
    /// Both branches of every fitted entry are considered. Only the first
    /// `site_count` entries of `fitted` are scanned, and IDs outside the
    /// catalog mark empty sites. Returns `None` for frequencies at or above
    /// 6 GHz, or when neither a covering filter nor the wideband filter is
    /// fitted.
    pub fn select_by_frequency(
        &self,
        fitted: &[u8],
        site_count: usize,
        freq_khz: u32,
        bandwidth_khz: u32,
    ) -> Option<Selection> {
        let window = self.window(freq_khz, bandwidth_khz, site_count)?;
        self.frequency_hunt(fitted, site_count, &window)
            .map(Selection::resolved)
    }

    /// Select a site restricted to one band and direction
    ///
    /// Only entries built for `band` whose direction mask allows `hint` are
    /// considered, and only their `hint` branch is tested. When none of them
    /// passes the channel the frequency-only hunt is used instead. Any hint
    /// other than uplink tests the downlink branch, but a band match reports
    /// `hint` itself as its direction before the swap is applied.
    pub fn select_by_band_and_frequency(
        &self,
        fitted: &[u8],
        site_count: usize,
        freq_khz: u32,
        bandwidth_khz: u32,
        band: BandFilter,
        hint: Direction,
    ) -> Option<Selection> {
        let window = self.window(freq_khz, bandwidth_khz, site_count)?;

        self.band_hunt(fitted, site_count, &window, band, hint)
            .or_else(|| {
                debug!(
                    "No fitted {} filter passes {} kHz, falling back to frequency hunt",
                    band, freq_khz
                );
                self.frequency_hunt(fitted, site_count, &window)
            })
            .map(Selection::resolved)
    }

    /// Best catalog entry for a channel in one direction
    ///
    /// Searches catalog IDs rather than board sites: every ID when
    /// `candidates` is `None`, otherwise just the listed ones. With
    /// [`Direction::Unknown`] the direction mask is tested for downlink and
    /// each entry is tested on its populated branch. Returns the catalog ID.
    pub fn best_catalog_filter(
        &self,
        freq_khz: u32,
        bandwidth_khz: u32,
        direction: Direction,
        candidates: Option<&[u8]>,
    ) -> Option<usize> {
        let window = ChannelWindow::checked(freq_khz, bandwidth_khz)?;
        let ids: Vec<usize> = match candidates {
            Some(ids) => ids.iter().map(|&id| usize::from(id)).collect(),
            None => (0..self.catalog.len()).collect(),
        };

        let mut best = BestCandidate::new();
        let mut wideband_seen = false;

        for id in ids {
            let Some(entry) = self.catalog.entry(id) else {
                continue;
            };
            let is_wideband = id == usize::from(WIDEBAND_FILTER_ID);
            wideband_seen |= is_wideband;

            if !entry.direction_mask.allows(direction) {
                continue;
            }
            if let Some(offset) = passing_offset(entry.branch(direction), &window) {
                if !is_wideband {
                    best.offer(id, offset);
                }
            }
        }

        best.into_inner()
            .or_else(|| wideband_seen.then_some(usize::from(WIDEBAND_FILTER_ID)))
    }

    fn window(
        &self,
        freq_khz: u32,
        bandwidth_khz: u32,
        site_count: usize,
    ) -> Option<ChannelWindow> {
        let Some(window) = ChannelWindow::checked(freq_khz, bandwidth_khz) else {
            debug!("{} kHz is above the RF ceiling, no site available", freq_khz);
            return None;
        };
        debug!(
            "Selecting over {} sites for {} kHz / {} kHz: centre {} dMHz, edges {}..={} dMHz",
            site_count,
            freq_khz,
            bandwidth_khz,
            window.centre_dmhz,
            window.low_dmhz,
            window.high_dmhz
        );
        Some(window)
    }

    /// Fitted sites in scan order, skipping empty ones
    fn fitted_sites<'a>(
        &'a self,
        fitted: &'a [u8],
        site_count: usize,
    ) -> impl Iterator<Item = (usize, u8, &'static FilterBand)> + 'a {
        fitted
            .iter()
            .enumerate()
            .take(site_count)
            .filter_map(move |(site, &id)| match self.catalog.entry(usize::from(id)) {
                Some(entry) => Some((site, id, entry)),
                None => {
                    trace!("Site {} has no usable filter (id {:#04x})", site, id);
                    None
                }
            })
    }

    /// Frequency-only search, before any direction swap
    fn frequency_hunt(
        &self,
        fitted: &[u8],
        site_count: usize,
        window: &ChannelWindow,
    ) -> Option<Selection> {
        let mut best = BestCandidate::new();
        let mut wideband_site = None;

        for (site, id, entry) in self.fitted_sites(fitted, site_count) {
            let is_wideband = id == WIDEBAND_FILTER_ID;
            if is_wideband {
                wideband_site = Some(site);
            }

            for direction in Direction::SCAN_ORDER {
                let Some(offset) = passing_offset(entry.branch(direction), window) else {
                    trace!("Site {} ({:#04x}) {} does not pass", site, id, direction);
                    continue;
                };
                trace!("Site {} ({:#04x}) {} passes, offset {}", site, id, direction, offset);

                if is_wideband {
                    continue;
                }
                let candidate = Selection {
                    site,
                    filter_id: id,
                    direction,
                    extra_data: entry.extra_data,
                };
                if best.offer(candidate, offset) {
                    debug!(
                        "New best: site {} ({:#04x}) {}, offset {}",
                        site, id, direction, offset
                    );
                }
            }
        }

        best.into_inner().or_else(|| {
            wideband_site.map(|site| {
                debug!("No filter passes the channel, using wideband at site {}", site);
                Selection {
                    site,
                    filter_id: WIDEBAND_FILTER_ID,
                    direction: Direction::Uplink,
                    extra_data: ExtraData::NONE,
                }
            })
        })
    }

    /// Band-constrained search over the branch picked by `hint`, before any
    /// direction swap
    fn band_hunt(
        &self,
        fitted: &[u8],
        site_count: usize,
        window: &ChannelWindow,
        band: BandFilter,
        hint: Direction,
    ) -> Option<Selection> {
        let branch = hint_branch(hint);
        let mut best = BestCandidate::new();

        for (site, id, entry) in self.fitted_sites(fitted, site_count) {
            if entry.band != band || !entry.direction_mask.allows(hint) {
                continue;
            }
            let Some(offset) = passing_offset(entry.branch(branch), window) else {
                trace!("Site {} ({:#04x}) {} does not pass", site, id, branch);
                continue;
            };
            if id == WIDEBAND_FILTER_ID {
                continue;
            }

            let candidate = Selection {
                site,
                filter_id: id,
                direction: hint,
                extra_data: entry.extra_data,
            };
            if best.offer(candidate, offset) {
                debug!(
                    "New best in {}: site {} ({:#04x}), offset {}",
                    band, site, id, offset
                );
            }
        }

        best.into_inner()
    }
}
