//! Command-line arguments

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use rxfilter_bands::{band_to_filter_type, BandFilter, CatalogError, Direction};
use rxfilter_select::{parse_filter_id, BoardProfile, BoardVariant, FittedFilterIds};

/// RX filter catalog queries and filter site selection
#[derive(Parser, Debug)]
#[command(name = "rxfilter", version, about = "RX filter catalog and site selection")]
pub struct Cli {
    /// Board profile (JSON) with the fitted filter IDs
    #[arg(long, global = true)]
    pub board: Option<PathBuf>,

    /// Board variant, used with --fitted instead of a profile file
    #[arg(long, global = true)]
    pub variant: Option<BoardVariant>,

    /// Fitted filter IDs by site, e.g. 21,0x16,23
    #[arg(long, global = true)]
    pub fitted: Option<FittedFilterIds>,

    /// Print JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select the filter site for a channel
    Select {
        /// Channel centre in kHz
        #[arg(long)]
        freq_khz: u32,

        /// Channel bandwidth in kHz
        #[arg(long, default_value_t = 200)]
        bw_khz: u32,

        /// Restrict to a band (name like LTE7, or a 3GPP/NR band number)
        #[arg(long, value_parser = parse_band)]
        band: Option<BandFilter>,

        /// Direction hint for band-constrained selection (ul, dl)
        #[arg(long, default_value_t = Direction::Unknown)]
        direction: Direction,
    },

    /// Passband limits of a catalog filter
    Limits {
        /// Catalog filter ID, decimal or 0x hex
        #[arg(long, value_parser = parse_filter_id)]
        filter_id: u8,

        /// Branch to report (ul, dl); single-arm filters need none
        #[arg(long, default_value_t = Direction::Unknown)]
        direction: Direction,
    },

    /// Show one catalog entry
    Show {
        /// Catalog filter ID, decimal or 0x hex
        #[arg(value_parser = parse_filter_id)]
        filter_id: u8,
    },

    /// List catalog entries
    List {
        /// Only entries for this band
        #[arg(long, value_parser = parse_band)]
        band: Option<BandFilter>,
    },

    /// Map a 3GPP/NR band number to its band filter type
    MapBand {
        /// Band number, e.g. 7 or 78
        number: u32,
    },
}

/// Band filter from a name (`LTE7`, `band_filter_gsm850`) or band number
pub fn parse_band(s: &str) -> Result<BandFilter, CatalogError> {
    match s.trim().parse::<u32>() {
        Ok(number) => Ok(band_to_filter_type(number)),
        Err(_) => s.parse(),
    }
}

impl Cli {
    /// Board given by `--board`, or by `--variant` with `--fitted`
    pub fn board_profile(&self) -> Result<Option<BoardProfile>> {
        if let Some(path) = &self.board {
            let profile = BoardProfile::load(path)
                .with_context(|| format!("loading board profile {}", path.display()))?;
            return Ok(Some(profile));
        }

        match (self.variant, &self.fitted) {
            (Some(variant), Some(fitted)) => {
                let profile = BoardProfile::new(variant.to_string(), variant, fitted.clone())?;
                Ok(Some(profile))
            }
            (Some(_), None) => bail!("--variant needs --fitted"),
            (None, Some(_)) => bail!("--fitted needs --variant"),
            (None, None) => Ok(None),
        }
    }
}
