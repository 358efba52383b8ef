//! Cryptocurrency symbols and the reader for the symbol list file.
//!
//! The input file is plain UTF-8 text with one symbol per line. Surrounding
//! whitespace is trimmed and blank lines are skipped; order and case are kept
//! exactly as written, duplicates included.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::info;

use crate::error::SheetError;

/// A single, non-empty, trimmed symbol token such as `bitcoin`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Builds a symbol from raw text, returning `None` when nothing is left after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Symbol(trimmed.to_string()))
        }
    }

    /// The symbol text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Trait providing line-oriented parsing of symbols.
pub trait SymbolParser {
    /// Parses symbols from a buffered reader.
    ///
    /// Each non-blank line becomes one value. The result may be empty.
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Symbol>, SheetError>;
}

impl SymbolParser for Symbol {
    fn parse_from_reader<R: BufRead>(reader: R) -> Result<Vec<Self>, SheetError> {
        let mut symbols = Vec::new();

        for line_result in reader.lines() {
            let line = line_result.map_err(SheetError::Io)?;
            if let Some(symbol) = Symbol::new(&line) {
                symbols.push(symbol);
            }
        }
        Ok(symbols)
    }
}

/// Reads the symbol list at `path`.
///
/// Fails with [`SheetError::InputNotFound`] when the file does not exist,
/// [`SheetError::Io`] on any other read failure and [`SheetError::EmptyInput`]
/// when the file holds no symbols.
pub fn read_symbols(path: &Path) -> Result<Vec<Symbol>, SheetError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SheetError::InputNotFound(path.to_path_buf()),
        _ => SheetError::Io(e),
    })?;

    let symbols = Symbol::parse_from_reader(BufReader::new(file))?;
    if symbols.is_empty() {
        return Err(SheetError::EmptyInput(path.to_path_buf()));
    }
    info!("Read {} symbol(s) from {}", symbols.len(), path.display());
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn parse(text: &str) -> Vec<String> {
        Symbol::parse_from_reader(Cursor::new(text))
            .unwrap()
            .into_iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_trims_and_skips_blank_lines() {
        assert_eq!(
            parse("  bitcoin \n\n\tethereum\r\n   \nsolana"),
            vec!["bitcoin", "ethereum", "solana"]
        );
    }

    #[test]
    fn test_keeps_order_case_and_duplicates() {
        assert_eq!(
            parse("Ethereum\nbitcoin\nEthereum\n"),
            vec!["Ethereum", "bitcoin", "Ethereum"]
        );
    }

    #[test]
    fn test_blank_only_input_is_empty() {
        assert!(parse("\n   \n\t\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_symbol_new_rejects_whitespace() {
        assert!(Symbol::new("   ").is_none());
        assert_eq!(Symbol::new(" dogecoin ").unwrap().as_str(), "dogecoin");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let result = Symbol::parse_from_reader(Cursor::new(vec![0x62, 0xff, 0xfe, b'\n']));
        assert!(matches!(result, Err(SheetError::Io(_))));
    }

    #[test]
    fn test_read_symbols_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        match read_symbols(&path) {
            Err(SheetError::InputNotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_read_symbols_blank_file_is_empty_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   \n\n").unwrap();
        assert!(matches!(
            read_symbols(file.path()),
            Err(SheetError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_read_symbols_counts_non_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "bitcoin\n\n  ethereum  \ncardano\n").unwrap();
        let symbols = read_symbols(file.path()).unwrap();
        assert_eq!(symbols.len(), 3);
        assert_eq!(symbols[1].as_str(), "ethereum");
    }
}
