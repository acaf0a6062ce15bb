// src/config.rs

use log::{debug, warn};
use quote_service::client::{parse_base_url, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use std::env;
use std::net::ToSocketAddrs;
use std::time::Duration;

const BIND_ADDRESS: &str = "COTACOES_BIND_ADDRESS";
const PROVIDER_URL: &str = "COTACOES_PROVIDER_URL";
const PROVIDER_TIMEOUT_SECS: &str = "COTACOES_PROVIDER_TIMEOUT_SECS";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub provider_url: String,
    pub provider_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            provider_url: DEFAULT_BASE_URL.to_string(),
            provider_timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    // Reads `.env` when present, then the process environment
    pub fn load() -> Self {
        if let Err(err) = dotenv::dotenv() {
            debug!("No .env file loaded: {}", err);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(address) = lookup(BIND_ADDRESS).filter(|value| !value.trim().is_empty()) {
            let address = address.trim();
            let resolves = address
                .to_socket_addrs()
                .map(|mut resolved| resolved.next().is_some())
                .unwrap_or(false);
            if resolves {
                config.bind_address = address.to_string();
            } else {
                warn!(
                    "Ignoring invalid {}={:?}, using {}",
                    BIND_ADDRESS, address, DEFAULT_BIND_ADDRESS
                );
            }
        }

        if let Some(url) = lookup(PROVIDER_URL).filter(|value| !value.trim().is_empty()) {
            let url = url.trim();
            match parse_base_url(url) {
                Ok(_) => config.provider_url = url.to_string(),
                Err(err) => warn!("Ignoring {}: {}, using {}", PROVIDER_URL, err, DEFAULT_BASE_URL),
            }
        }

        if let Some(secs) = lookup(PROVIDER_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.provider_timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring invalid {}={:?}, using {}s",
                    PROVIDER_TIMEOUT_SECS,
                    secs,
                    DEFAULT_TIMEOUT.as_secs()
                ),
            }
        }

        config
    }
}
