//! Text and JSON reports

use std::fmt;

use anyhow::Result;
use serde::Serialize;

use rxfilter_bands::{BandFilter, Direction, FilterBand, FilterCatalog, FreqRange};
use rxfilter_select::{
    high_limit, hint_branch, ladon_filter_id, low_limit, resolve_direction, Selection,
};

/// Print a report to stdout as text or pretty JSON
pub fn emit<T: Serialize + fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

/// `low-high` in MHz, or `-` for an unused branch
fn format_range(range: &FreqRange) -> String {
    if range.is_unused() {
        "-".to_string()
    } else {
        format!("{:.1}-{:.1}", range.low_mhz(), range.high_mhz())
    }
}

#[derive(Debug, Serialize)]
pub struct SelectionReport {
    pub board: String,
    pub freq_khz: u32,
    pub bw_khz: u32,
    pub band: Option<BandFilter>,
    /// Site index, or -1 when nothing is available
    pub site: i32,
    pub selection: Option<Selection>,
    /// Passband of the branch that passes the channel, in dMHz
    pub low_dmhz: u16,
    pub high_dmhz: u16,
}

impl SelectionReport {
    pub fn new(
        catalog: &FilterCatalog,
        board: &str,
        freq_khz: u32,
        bw_khz: u32,
        band: Option<BandFilter>,
        selection: Option<Selection>,
    ) -> Self {
        let (low_dmhz, high_dmhz) = match &selection {
            Some(sel) => {
                // The swap was applied to the output; undo it to find the
                // branch that passes the channel. An unknown hint was matched
                // on the downlink branch.
                let arm = hint_branch(resolve_direction(sel.extra_data, sel.direction));
                let id = usize::from(sel.filter_id);
                (low_limit(catalog, id, arm), high_limit(catalog, id, arm))
            }
            None => (0, 0),
        };
        Self {
            board: board.to_string(),
            freq_khz,
            bw_khz,
            band,
            site: Selection::site_code(selection.as_ref()),
            selection,
            low_dmhz,
            high_dmhz,
        }
    }
}

impl fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(sel) = &self.selection else {
            return write!(
                f,
                "{}: no filter site available for {} kHz / {} kHz",
                self.board, self.freq_khz, self.bw_khz
            );
        };
        let passband = FreqRange::new(self.low_dmhz, self.high_dmhz);
        write!(
            f,
            "{}: site {} filter {:#04x} {}, extra {}, passband {} MHz",
            self.board,
            sel.site,
            sel.filter_id,
            sel.direction,
            sel.extra_data,
            format_range(&passband)
        )
    }
}

#[derive(Debug, Serialize)]
pub struct LimitsReport {
    pub filter_id: u8,
    pub direction: Direction,
    pub low_dmhz: u16,
    pub high_dmhz: u16,
    pub ladon_id: Option<u16>,
}

impl LimitsReport {
    pub fn new(catalog: &FilterCatalog, filter_id: u8, direction: Direction) -> Self {
        let id = usize::from(filter_id);
        Self {
            filter_id,
            direction,
            low_dmhz: low_limit(catalog, id, direction),
            high_dmhz: high_limit(catalog, id, direction),
            ladon_id: ladon_filter_id(catalog, id),
        }
    }
}

impl fmt::Display for LimitsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:#04x} {}: {}-{} dMHz",
            self.filter_id, self.direction, self.low_dmhz, self.high_dmhz
        )?;
        if let Some(ladon) = self.ladon_id {
            write!(f, ", ladon id {}", ladon)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct EntryReport {
    pub filter_id: usize,
    #[serde(flatten)]
    pub entry: FilterBand,
}

impl fmt::Display for EntryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.entry;
        write!(
            f,
            "{:#04x}  {:<8} UL {:<15} DL {:<15} {:<5} lte {:>3}  {}/{}  {}",
            self.filter_id,
            e.band.name(),
            format_range(&e.uplink),
            format_range(&e.downlink),
            e.direction_mask.name(),
            e.lte_band,
            e.filter_no,
            e.filters_per_band,
            e.extra_data
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListReport(pub Vec<EntryReport>);

impl ListReport {
    pub fn new(catalog: &FilterCatalog, band: Option<BandFilter>) -> Self {
        let entries = catalog
            .iter()
            .filter(|(_, entry)| band.map_or(true, |b| entry.band == b))
            .map(|(filter_id, entry)| EntryReport {
                filter_id,
                entry: *entry,
            })
            .collect();
        Self(entries)
    }
}

impl fmt::Display for ListReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[derive(Debug, Serialize)]
pub struct BandMapReport {
    pub band_number: u32,
    pub band: BandFilter,
    pub code: i32,
    pub common_name: &'static str,
}

impl BandMapReport {
    pub fn new(band_number: u32, band: BandFilter) -> Self {
        Self {
            band_number,
            band,
            code: band.code(),
            common_name: band.common_name(),
        }
    }
}

impl fmt::Display for BandMapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "band {} -> {} ({}, code {})",
            self.band_number, self.band, self.common_name, self.code
        )
    }
}
