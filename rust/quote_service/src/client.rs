// src/client.rs

use crate::error::QuoteError;
use crate::models::{normalize_tickers, ProviderResponse, QuoteMap, QuoteRecord};
use crate::simulator;
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Url};
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://brapi.dev/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// Anything the request handlers can pull quotes from
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn quotes(&self, tickers: &[String]) -> Result<QuoteMap, QuoteError>;
}

// brapi.dev client; falls back to simulated data whenever the provider fails
#[derive(Clone, Debug)]
pub struct QuoteFetcher {
    client: Client,
    base_url: Url,
}

// Absolute http(s) URL that can take further path segments
pub fn parse_base_url(base_url: &str) -> Result<Url, QuoteError> {
    let invalid = || QuoteError::InvalidUrl(base_url.to_string());
    let url = Url::parse(base_url.trim_end_matches('/')).map_err(|_| invalid())?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(url)
}

impl QuoteFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(QuoteError::Client)?;

        Ok(QuoteFetcher {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    // The joined tickers travel as a single percent-encoded path segment
    fn quote_url(&self, tickers: &[String]) -> Result<Url, QuoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| QuoteError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("quote")
            .push(&tickers.join(","));
        Ok(url)
    }

    pub async fn fetch<S: AsRef<str>>(&self, tickers: &[S]) -> QuoteMap {
        let tickers = normalize_tickers(tickers);
        if tickers.is_empty() {
            return QuoteMap::new();
        }

        match self.request(&tickers).await {
            Ok(response) => {
                let result = Self::collect(&tickers, response);
                info!("Fetched quotes for {} tickers", result.len());
                result
            }
            Err(err) => {
                warn!("Failed to fetch quotes from provider: {}. Using simulated data.", err);
                simulator::simulate(tickers.as_slice())
            }
        }
    }

    async fn request(&self, tickers: &[String]) -> Result<ProviderResponse, QuoteError> {
        let url = self.quote_url(tickers)?;
        info!("Requesting quotes for: {}", tickers.join(","));

        let response = self
            .client
            .get(url)
            .query(&[("fundamental", "false")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // Keys the provider's results by requested ticker, filling gaps with not-found records
    fn collect(tickers: &[String], response: ProviderResponse) -> QuoteMap {
        let mut received: HashMap<String, QuoteRecord> = HashMap::new();
        for quote in response.results {
            let record = QuoteRecord::from(quote);
            if tickers.contains(&record.symbol) {
                received.insert(record.symbol.clone(), record);
            } else {
                debug!("Ignoring unrequested symbol in provider response: {:?}", record.symbol);
            }
        }

        tickers
            .iter()
            .map(|ticker| {
                let record = received
                    .remove(ticker)
                    .unwrap_or_else(|| QuoteRecord::not_found(ticker));
                (ticker.clone(), record)
            })
            .collect()
    }
}

#[async_trait]
impl QuoteSource for QuoteFetcher {
    async fn quotes(&self, tickers: &[String]) -> Result<QuoteMap, QuoteError> {
        Ok(self.fetch(tickers).await)
    }
}
