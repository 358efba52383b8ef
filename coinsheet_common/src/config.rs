//! Immutable configuration handed to the pipeline.
//!
//! `FetchConfig` describes the quote API, `RunConfig` the files of one run.
//! Both are built once by the binary and only read afterwards.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

/// Default asset endpoint of the quote API.
pub const DEFAULT_BASE_URL: &str = "https://api.coincap.io/v2/assets";
/// Extension given to output files that have none.
pub const DEFAULT_EXTENSION: &str = "xlsx";

/// Quote API settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Asset endpoint; the symbol is appended as the last path segment.
    pub base_url: String,
    /// Value of the `key` query parameter, if any.
    pub api_key: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

/// Input and output locations of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Symbol list file.
    pub input_path: PathBuf,
    /// Directory the output file is placed in when given by name only.
    pub output_directory: PathBuf,
    /// Final spreadsheet path.
    pub output_path: PathBuf,
}

impl RunConfig {
    /// Resolves the run locations.
    ///
    /// - `output_directory` falls back to [`default_output_directory`].
    /// - `output_file` is joined onto the directory when relative; without one a
    ///   timestamped `crypto_info_<YYYYmmdd_HHMMSS>.xlsx` name is derived from `now`.
    /// - An empty `output_file` counts as none.
    /// - An `output_file` ending in a separator, or naming an existing directory, is
    ///   a directory: the default name is placed inside it.
    /// - A file name without an extension gets `.xlsx`.
    pub fn new(
        input_path: PathBuf,
        output_directory: Option<PathBuf>,
        output_file: Option<PathBuf>,
        now: DateTime<Local>,
    ) -> Self {
        let output_directory = output_directory.unwrap_or_else(default_output_directory);
        let output_path = match output_file.filter(|file| !file.as_os_str().is_empty()) {
            None => output_directory.join(default_file_name(now)),
            Some(file) => {
                let path = output_directory.join(&file);
                if ends_with_separator(&file) || path.is_dir() {
                    path.join(default_file_name(now))
                } else {
                    with_default_extension(path)
                }
            }
        };

        Self {
            input_path,
            output_directory,
            output_path,
        }
    }
}

/// The user's downloads folder, else `~/Downloads`, else the working directory.
pub fn default_output_directory() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_file_name(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!(
        "crypto_info_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        DEFAULT_EXTENSION
    ))
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .chars()
        .last()
        .is_some_and(std::path::is_separator)
}

fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
