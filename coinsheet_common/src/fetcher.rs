//! Per-symbol price requests against the quote API.
//!
//! `PriceFetcher` issues one blocking `GET {base_url}/{symbol}?key={api_key}` per
//! symbol, in input order, and maps the `data` object of a `200 OK` response into
//! a [`QuoteRecord`]. A failure for one symbol never stops the batch: it becomes a
//! [`FetchSkip`], is logged as a warning and the next symbol is processed.
//!
//! There are no retries, no backoff and no rate limiting. The HTTP client keeps
//! its default timeout.

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::config::FetchConfig;
use crate::error::SheetError;
use crate::quote::QuoteRecord;
use crate::symbols::Symbol;

/// Name of the API key query parameter.
const KEY_PARAM: &str = "key";

/// Why a symbol was left out of the batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchSkip {
    /// The API answered with a status other than `200 OK`.
    #[error("Failed to fetch data for symbol {symbol}: HTTP status {status}")]
    Status {
        /// Requested symbol.
        symbol: String,
        /// Returned status code.
        status: u16,
    },

    /// The request could not be sent or the body could not be read.
    #[error("Network error while fetching data for {symbol}: {message}")]
    Network {
        /// Requested symbol.
        symbol: String,
        /// Transport error description.
        message: String,
    },

    /// The body did not match the expected asset schema.
    #[error("Unexpected data format for symbol {symbol}: {message}")]
    Format {
        /// Requested symbol.
        symbol: String,
        /// What was wrong with the body.
        message: String,
    },
}

impl FetchSkip {
    /// The symbol that was skipped.
    pub fn symbol(&self) -> &str {
        match self {
            FetchSkip::Status { symbol, .. }
            | FetchSkip::Network { symbol, .. }
            | FetchSkip::Format { symbol, .. } => symbol,
        }
    }

    fn format(symbol: &Symbol, message: impl Into<String>) -> Self {
        FetchSkip::Format {
            symbol: symbol.to_string(),
            message: message.into(),
        }
    }
}

/// Result of one fetch attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The symbol produced a record.
    Success(QuoteRecord),
    /// The symbol was skipped.
    Skipped(FetchSkip),
}

/// Records and skip reasons of one fetch pass, both in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    /// Successfully fetched records.
    pub batch: Vec<QuoteRecord>,
    /// Symbols left out, with the reason.
    pub skipped: Vec<FetchSkip>,
}

impl FetchReport {
    /// Adds one outcome to the report.
    pub fn push(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Success(record) => self.batch.push(record),
            FetchOutcome::Skipped(skip) => self.skipped.push(skip),
        }
    }

    /// Number of symbols attempted.
    pub fn attempted(&self) -> usize {
        self.batch.len() + self.skipped.len()
    }
}

impl FromIterator<FetchOutcome> for FetchReport {
    fn from_iter<I: IntoIterator<Item = FetchOutcome>>(iter: I) -> Self {
        let mut report = FetchReport::default();
        for outcome in iter {
            report.push(outcome);
        }
        report
    }
}

/// `{"data": {...}}` envelope of the asset endpoint.
#[derive(Debug, Deserialize)]
struct AssetEnvelope {
    data: AssetData,
}

/// Fields of an asset; the numeric ones arrive as strings.
#[derive(Debug, Deserialize)]
struct AssetData {
    name: String,
    symbol: String,
    #[serde(rename = "priceUsd")]
    price_usd: String,
    #[serde(rename = "marketCapUsd")]
    market_cap_usd: String,
    #[serde(rename = "volumeUsd24Hr")]
    volume_usd_24h: String,
    #[serde(rename = "changePercent24Hr")]
    change_percent_24h: String,
}

/// Blocking client for the asset endpoint.
pub struct PriceFetcher {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl PriceFetcher {
    /// Creates a fetcher for `config`.
    ///
    /// Fails with [`SheetError::Config`] if the base URL cannot take path segments.
    pub fn new(config: FetchConfig) -> Result<Self, SheetError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            SheetError::Config(format!("invalid base URL {:?}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SheetError::Config(format!(
                "base URL {:?} cannot take a symbol path",
                config.base_url
            )));
        }
        if config.api_key.is_none() {
            warn!("No API key configured; requests are sent without a `key` parameter");
        }

        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }

    /// `{base_url}/{symbol}` with the symbol as a single encoded path segment.
    pub fn asset_url(&self, symbol: &Symbol) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(symbol.as_str());
        }
        url
    }

    /// Fetches every symbol in order and folds the outcomes into a report.
    pub fn fetch_all(&self, symbols: &[Symbol]) -> FetchReport {
        info!("Fetching quotes for {} symbol(s)", symbols.len());
        symbols.iter().map(|symbol| self.fetch_one(symbol)).collect()
    }

    /// Fetches a single symbol. Skips are logged here.
    pub fn fetch_one(&self, symbol: &Symbol) -> FetchOutcome {
        match self.try_fetch(symbol) {
            Ok(record) => {
                debug!(
                    "QUOTE: {} ({}) Price={} Change={}%",
                    record.name, record.symbol, record.current_price, record.price_change_24h
                );
                FetchOutcome::Success(record)
            }
            Err(skip) => {
                warn!("{}", skip);
                FetchOutcome::Skipped(skip)
            }
        }
    }

    fn try_fetch(&self, symbol: &Symbol) -> Result<QuoteRecord, FetchSkip> {
        let url = self.asset_url(symbol);
        debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(key) = &self.api_key {
            request = request.query(&[(KEY_PARAM, key.as_str())]);
        }

        let network = |e: reqwest::Error| FetchSkip::Network {
            symbol: symbol.to_string(),
            message: e.without_url().to_string(),
        };

        let response = request.send().map_err(network)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchSkip::Status {
                symbol: symbol.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(network)?;
        parse_asset(symbol, &body, Local::now())
    }
}

/// Maps an asset response body into a record stamped with `fetched_at`.
///
/// Missing or null fields, numbers that do not parse, non-finite values and a
/// negative price, market cap or volume are all format errors.
pub fn parse_asset(
    symbol: &Symbol,
    body: &str,
    fetched_at: DateTime<Local>,
) -> Result<QuoteRecord, FetchSkip> {
    let envelope: AssetEnvelope =
        serde_json::from_str(body).map_err(|e| FetchSkip::format(symbol, e.to_string()))?;
    let data = envelope.data;

    Ok(QuoteRecord {
        current_price: parse_amount(symbol, "priceUsd", &data.price_usd, false)?,
        market_cap: parse_amount(symbol, "marketCapUsd", &data.market_cap_usd, false)?,
        total_volume: parse_amount(symbol, "volumeUsd24Hr", &data.volume_usd_24h, false)?,
        price_change_24h: parse_amount(symbol, "changePercent24Hr", &data.change_percent_24h, true)?,
        name: data.name,
        symbol: data.symbol,
        last_updated: fetched_at,
    })
}

fn parse_amount(
    symbol: &Symbol,
    field: &str,
    raw: &str,
    allow_negative: bool,
) -> Result<f64, FetchSkip> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| FetchSkip::format(symbol, format!("`{}` is not a number: {:?}", field, raw)))?;

    if !value.is_finite() {
        return Err(FetchSkip::format(symbol, format!("`{}` is not finite: {:?}", field, raw)));
    }
    if !allow_negative && value < 0.0 {
        return Err(FetchSkip::format(symbol, format!("`{}` is negative: {}", field, value)));
    }
    Ok(value)
}
