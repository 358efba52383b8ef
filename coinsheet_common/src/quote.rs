//! Quote record produced for each successfully fetched symbol.
//!
//! A `QuoteRecord` is one spreadsheet row. The `Column` enum fixes the order and
//! the header text of the seven output columns.

use chrono::{DateTime, Local};
use strum_macros::{Display, EnumIter};

/// Format used for the `Last Updated` cell.
pub const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Market data for a single symbol at the moment it was fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteRecord {
    /// Asset display name (e.g., `Bitcoin`).
    pub name: String,
    /// Ticker as reported by the API (e.g., `BTC`).
    pub symbol: String,
    /// Price in USD.
    pub current_price: f64,
    /// Market capitalisation in USD.
    pub market_cap: f64,
    /// Traded volume over the last 24 hours in USD.
    pub total_volume: f64,
    /// Price change over the last 24 hours, in percent. May be negative.
    pub price_change_24h: f64,
    /// Local wall-clock time at which the quote was captured.
    pub last_updated: DateTime<Local>,
}

/// A single cell value of a record row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Text cell.
    Text(String),
    /// Numeric cell.
    Number(f64),
}

impl QuoteRecord {
    /// Returns the value this record holds for `column`.
    pub fn cell(&self, column: Column) -> Cell {
        match column {
            Column::Name => Cell::Text(self.name.clone()),
            Column::Symbol => Cell::Text(self.symbol.clone()),
            Column::CurrentPrice => Cell::Number(self.current_price),
            Column::MarketCap => Cell::Number(self.market_cap),
            Column::TotalVolume => Cell::Number(self.total_volume),
            Column::PriceChange24h => Cell::Number(self.price_change_24h),
            Column::LastUpdated => {
                Cell::Text(self.last_updated.format(LAST_UPDATED_FORMAT).to_string())
            }
        }
    }
}

/// Output columns, in sheet order.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Column {
    #[strum(serialize = "Name")]
    Name,
    #[strum(serialize = "Symbol")]
    Symbol,
    #[strum(serialize = "Current Price")]
    CurrentPrice,
    #[strum(serialize = "Market Cap")]
    MarketCap,
    #[strum(serialize = "Total Volume")]
    TotalVolume,
    #[strum(serialize = "Price Change (24h)")]
    PriceChange24h,
    #[strum(serialize = "Last Updated")]
    LastUpdated,
}
