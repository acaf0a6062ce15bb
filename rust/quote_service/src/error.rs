// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Invalid quote provider URL {0:?}")]
    InvalidUrl(String),
    #[error("Request to quote provider failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Quote provider answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("Malformed quote provider payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Unavailable(String),
}
