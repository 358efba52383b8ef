//! The read, fetch and export sequence of one run.
//!
//! File-level and batch-level failures abort the run and are returned to the
//! caller. Per-symbol failures end up in [`RunSummary::skipped`].

use std::path::PathBuf;

use log::info;

use crate::config::RunConfig;
use crate::error::SheetError;
use crate::exporter::TableExporter;
use crate::fetcher::{FetchSkip, PriceFetcher};
use crate::symbols::read_symbols;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Written spreadsheet.
    pub output_path: PathBuf,
    /// Number of data rows (header excluded).
    pub rows_written: usize,
    /// Symbols left out of the sheet, in input order.
    pub skipped: Vec<FetchSkip>,
}

/// Runs the pipeline for `config`.
///
/// - the symbol file is read; a missing or empty file stops the run before any request
/// - every symbol is fetched in order
/// - an empty batch is a [`SheetError::BatchFailure`]
/// - the batch is written to `config.output_path`
pub fn run(
    config: &RunConfig,
    fetcher: &PriceFetcher,
    exporter: &TableExporter,
) -> Result<RunSummary, SheetError> {
    let symbols = read_symbols(&config.input_path)?;
    let report = fetcher.fetch_all(&symbols);

    if report.batch.is_empty() {
        return Err(SheetError::BatchFailure {
            attempted: report.attempted(),
        });
    }

    exporter.export(&report.batch, &config.output_path)?;
    info!(
        "Spreadsheet saved successfully: {}",
        config.output_path.display()
    );

    Ok(RunSummary {
        output_path: config.output_path.clone(),
        rows_written: report.batch.len(),
        skipped: report.skipped,
    })
}
