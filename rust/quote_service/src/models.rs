// src/models.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "BRL";
pub const NOT_FOUND_ERROR: &str = "Ativo não encontrado";

// Symbol -> record, in the order the tickers were requested
pub type QuoteMap = IndexMap<String, QuoteRecord>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub symbol: String,
    pub short_name: String,
    pub long_name: String,
    pub price: f64,
    pub currency: String,
    pub market_cap: Option<f64>,
    pub change_percent: f64,
    pub previous_close: f64,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QuoteRecord {
    // Placeholder for a ticker the provider has no data for
    pub fn not_found(symbol: &str) -> Self {
        QuoteRecord {
            symbol: symbol.to_string(),
            short_name: symbol.to_string(),
            long_name: format!("{}: {}", NOT_FOUND_ERROR, symbol),
            price: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            market_cap: None,
            change_percent: 0.0,
            previous_close: 0.0,
            valid: false,
            error: Some(NOT_FOUND_ERROR.to_string()),
        }
    }
}

// One item of the provider's `results` list
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProviderQuote {
    #[serde(default)]
    pub symbol: String,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub currency: Option<String>,
    pub market_cap: Option<f64>,
    pub regular_market_previous_close: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct ProviderResponse {
    #[serde(default)]
    pub results: Vec<ProviderQuote>,
}

impl From<ProviderQuote> for QuoteRecord {
    fn from(quote: ProviderQuote) -> Self {
        let symbol = normalize_ticker(&quote.symbol);
        let short_name = quote.short_name.unwrap_or_else(|| symbol.clone());
        let long_name = quote.long_name.unwrap_or_else(|| short_name.clone());
        let change_percent = change_percent(
            quote.regular_market_price,
            quote.regular_market_previous_close,
        );

        QuoteRecord {
            short_name,
            long_name,
            price: quote.regular_market_price.unwrap_or(0.0),
            currency: quote
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            market_cap: quote.market_cap,
            change_percent,
            previous_close: quote.regular_market_previous_close.unwrap_or(0.0),
            valid: true,
            error: None,
            symbol,
        }
    }
}

pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

// Trim, uppercase, drop blanks and repeats; first occurrence keeps its place
pub fn normalize_tickers<S: AsRef<str>>(tickers: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        let ticker = normalize_ticker(ticker.as_ref());
        if !ticker.is_empty() && !normalized.contains(&ticker) {
            normalized.push(ticker);
        }
    }
    normalized
}

// Splits a comma separated query value into raw tickers
pub fn split_tickers(param: &str) -> Vec<String> {
    param
        .split(',')
        .map(str::trim)
        .filter(|ticker| !ticker.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn change_percent(current: Option<f64>, previous: Option<f64>) -> f64 {
    match (current, previous) {
        (Some(current), Some(previous)) if previous != 0.0 => {
            round2((current - previous) / previous * 100.0)
        }
        _ => 0.0,
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
