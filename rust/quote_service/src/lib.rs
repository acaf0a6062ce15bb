// src/lib.rs

pub mod client;
pub mod error;
pub mod formatter;
pub mod models;
pub mod simulator;

pub use client::{QuoteFetcher, QuoteSource};
pub use error::QuoteError;
pub use models::{QuoteMap, QuoteRecord};
