// src/models.rs

use quote_service::models::split_tickers;
use quote_service::QuoteMap;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_TICKERS: [&str; 6] = ["PETR4", "VALE3", "BBAS3", "ITUB4", "BBDC4", "ABEV3"];

pub const SERVICE_NAME: &str = "cotacoes-api";
pub const MISSING_TICKERS_ERROR: &str = "Parâmetro tickers é obrigatório";
pub const API_EXAMPLE: &str = "/api/cotacoes?tickers=PETR4,VALE3,BBAS3";

// Raw query string pairs, repeats included
pub type QueryPairs = Vec<(String, String)>;

// A repeated parameter keeps its first value
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

// Query string of the HTML page: ?ativos=PETR4,VALE3 or ?busca=PETR4
#[derive(Deserialize, Debug, Default)]
pub struct IndexQuery {
    pub ativos: Option<String>,
    pub busca: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct TickerSelection {
    pub tickers: Vec<String>,
    pub search_query: String,
}

impl IndexQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        IndexQuery {
            ativos: first_value(pairs, "ativos"),
            busca: first_value(pairs, "busca"),
        }
    }

    // Any non-empty `busca` wins over `ativos`, even a blank one that selects
    // nothing; with neither, the default list is shown
    pub fn selection(&self) -> TickerSelection {
        if let Some(busca) = self.busca.as_deref().filter(|busca| !busca.is_empty()) {
            let busca = busca.trim();
            let tickers = if busca.is_empty() { Vec::new() } else { vec![busca.to_string()] };
            return TickerSelection {
                tickers,
                search_query: busca.to_string(),
            };
        }

        let tickers = match self.ativos.as_deref() {
            Some(ativos) if !ativos.is_empty() => split_tickers(ativos),
            _ => DEFAULT_TICKERS.iter().map(|ticker| ticker.to_string()).collect(),
        };

        TickerSelection {
            tickers,
            search_query: String::new(),
        }
    }
}

#[derive(Deserialize, Debug, Validate)]
pub struct ApiQuery {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub tickers: String,
}

impl ApiQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        ApiQuery {
            tickers: first_value(pairs, "tickers").unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuotesResponse {
    pub success: bool,
    pub data: QuoteMap,
    pub total: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MissingParamResponse {
    pub error: String,
    pub example: String,
}

impl Default for MissingParamResponse {
    fn default() -> Self {
        MissingParamResponse {
            error: MISSING_TICKERS_ERROR.to_string(),
            example: API_EXAMPLE.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        HealthResponse {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
        }
    }
}
