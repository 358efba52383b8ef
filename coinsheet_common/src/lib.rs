//!
//! Shared building blocks of the coinsheet exporter.
//!
//! This crate aggregates:
//! - `error` — unified error type `SheetError` used across the workspace.
//! - `result` — handy `Result<T, SheetError>` alias.
//! - `symbols` — reading the symbol list file.
//! - `quote` — the `QuoteRecord` row type and the fixed output columns.
//! - `fetcher` — per-symbol price requests against the quote API.
//! - `exporter` — writing a batch of records into an `.xlsx` sheet.
//! - `config` — immutable run and fetch configuration.
//! - `pipeline` — the read, fetch and export sequence of one run.
#![warn(missing_docs)]
pub mod config;
pub mod error;
pub mod exporter;
pub mod fetcher;
pub mod pipeline;
pub mod quote;
pub mod result;
pub mod symbols;

pub use error::SheetError;
pub use result::Result;
