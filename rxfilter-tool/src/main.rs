//! RX Filter Command-Line Tool
//!
//! Queries the filter catalog and runs site selection for a board, either
//! from a JSON board profile (`--board`) or from a variant and fitted IDs
//! given on the command line (`--variant`, `--fitted`).

mod cli;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rxfilter_bands::{band_to_filter_type, FilterCatalog};
use rxfilter_select::FilterSelector;

use cli::{Cli, Command};
use output::{emit, BandMapReport, EntryReport, LimitsReport, ListReport, SelectionReport};

fn main() -> Result<()> {
    // Logs go to stderr so reports on stdout stay machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rxfilter=info,rxfilter_bands=info,rxfilter_select=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let catalog = FilterCatalog::standard();

    match &cli.command {
        Command::Select {
            freq_khz,
            bw_khz,
            band,
            direction,
        } => {
            let profile = cli
                .board_profile()?
                .context("select needs a board: pass --board or --variant with --fitted")?;
            let selector = FilterSelector::new(catalog);

            let selection = match band {
                Some(band) => profile.select_by_band_and_frequency(
                    &selector, *freq_khz, *bw_khz, *band, *direction,
                ),
                None => profile.select_by_frequency(&selector, *freq_khz, *bw_khz),
            };
            tracing::debug!("Selection for '{}': {:?}", profile.name, selection);

            let report =
                SelectionReport::new(&catalog, &profile.name, *freq_khz, *bw_khz, *band, selection);
            emit(&report, cli.json)
        }

        Command::Limits {
            filter_id,
            direction,
        } => emit(&LimitsReport::new(&catalog, *filter_id, *direction), cli.json),

        Command::Show { filter_id } => {
            let id = usize::from(*filter_id);
            let entry = catalog.get(id)?;
            emit(
                &EntryReport {
                    filter_id: id,
                    entry: *entry,
                },
                cli.json,
            )
        }

        Command::List { band } => emit(&ListReport::new(&catalog, *band), cli.json),

        Command::MapBand { number } => {
            emit(&BandMapReport::new(*number, band_to_filter_type(*number)), cli.json)
        }
    }
}
