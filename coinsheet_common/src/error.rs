//! Error types shared between the library and the binary.
//!
//! `SheetError` covers every failure that aborts a run: a missing or empty
//! input file, a batch in which no symbol could be fetched, and a spreadsheet
//! that could not be written. Per-symbol fetch problems are not errors of this
//! kind; they are reported as [`crate::fetcher::FetchSkip`] and the run goes on.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for a coinsheet run.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The symbol list file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The symbol list file holds no symbols once blank lines are dropped.
    #[error("Input file is empty or does not contain valid symbols: {}", .0.display())]
    EmptyInput(PathBuf),

    /// I/O error while reading the symbol list.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Every symbol of the batch was skipped, nothing to export.
    #[error("Failed to fetch data from the API for all {attempted} symbol(s)")]
    BatchFailure {
        /// Number of symbols that were attempted.
        attempted: usize,
    },

    /// The spreadsheet could not be written (bad path, permissions, locked file).
    #[error("Error saving spreadsheet: {0}")]
    Output(#[from] rust_xlsxwriter::XlsxError),

    /// Invalid configuration value, such as an unusable base URL.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
