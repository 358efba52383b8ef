//! coinsheet — reads cryptocurrency symbols from a text file, fetches the current
//! quote of each one from the CoinCap asset API and saves the results as an
//! `.xlsx` spreadsheet.
//!
//! Usage example (CLI):
//! ```bash
//! coinsheet --input ./coins.txt --output-dir ~/reports --output prices.xlsx
//! ```
//!
//! The symbol file holds one symbol per line (e.g. `bitcoin`). Symbols that
//! cannot be fetched are reported and left out of the sheet.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use chrono::Local;
use clap::Parser;
use coinsheet_common::config::{normalize_path, FetchConfig, RunConfig};
use coinsheet_common::exporter::TableExporter;
use coinsheet_common::fetcher::PriceFetcher;
use coinsheet_common::pipeline;
use coinsheet_common::Result;
use coinsheet_common::SheetError;
use log::{error, info, warn};
use std::process;

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

/// Builds the configuration from `args` and runs the pipeline once.
fn run(args: Args) -> Result<(), SheetError> {
    let config = RunConfig::new(
        normalize_path(&args.input),
        args.output_dir.as_deref().map(normalize_path),
        args.output.as_deref().map(normalize_path),
        Local::now(),
    );
    info!("Input file: {}", config.input_path.display());
    info!("Output file: {}", config.output_path.display());

    let fetcher = PriceFetcher::new(FetchConfig {
        base_url: args.base_url.trim().to_string(),
        api_key: args.api_key.filter(|key| !key.trim().is_empty()),
    })?;

    let summary = pipeline::run(&config, &fetcher, &TableExporter::default())?;
    for skip in &summary.skipped {
        warn!("Skipped: {}", skip);
    }
    info!(
        "Done: {} row(s) written, {} symbol(s) skipped",
        summary.rows_written,
        summary.skipped.len()
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
