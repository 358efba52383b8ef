//! Command-line arguments for coinsheet.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use coinsheet_common::config::DEFAULT_BASE_URL;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a text file with cryptocurrency symbols, one per line.
    #[clap(long)]
    pub input: String,

    /// Directory for the spreadsheet. Defaults to the downloads folder.
    #[clap(long)]
    pub output_dir: Option<String>,

    /// Spreadsheet file name or path. `.xlsx` is added when there is no extension.
    #[clap(long)]
    pub output: Option<String>,

    /// Asset endpoint of the quote API.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key sent as the `key` query parameter.
    #[clap(long, env = "COINCAP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
