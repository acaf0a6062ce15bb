// src/simulator.rs

use crate::models::{normalize_ticker, round2, QuoteMap, QuoteRecord, DEFAULT_CURRENCY};
use log::info;
use rand::Rng;

pub struct KnownCompany {
    pub symbol: &'static str,
    pub long_name: &'static str,
    pub short_name: &'static str,
    pub base_price: f64,
}

pub const KNOWN_COMPANIES: [KnownCompany; 10] = [
    KnownCompany { symbol: "PETR4", long_name: "Petróleo Brasileiro S.A. - Petrobras", short_name: "PETROBRAS PN", base_price: 32.50 },
    KnownCompany { symbol: "VALE3", long_name: "Vale S.A.", short_name: "VALE ON", base_price: 61.20 },
    KnownCompany { symbol: "BBAS3", long_name: "Banco do Brasil S.A.", short_name: "BANCO BRASIL ON", base_price: 28.45 },
    KnownCompany { symbol: "ITUB4", long_name: "Itaú Unibanco Holding S.A.", short_name: "ITAUUNIBANCO PN", base_price: 23.80 },
    KnownCompany { symbol: "BBDC4", long_name: "Banco Bradesco S.A.", short_name: "BRADESCO PN", base_price: 15.25 },
    KnownCompany { symbol: "ABEV3", long_name: "Ambev S.A.", short_name: "AMBEV ON", base_price: 12.65 },
    KnownCompany { symbol: "MGLU3", long_name: "Magazine Luiza S.A.", short_name: "MAGAZ LUIZA ON", base_price: 8.90 },
    KnownCompany { symbol: "WEGE3", long_name: "WEG S.A.", short_name: "WEG ON", base_price: 45.30 },
    KnownCompany { symbol: "RENT3", long_name: "Localiza Rent a Car S.A.", short_name: "LOCALIZA ON", base_price: 42.15 },
    KnownCompany { symbol: "LREN3", long_name: "Lojas Renner S.A.", short_name: "LOJAS RENNER ON", base_price: 18.75 },
];

// Relative change bounds, as fractions of the base price
pub const KNOWN_MAX_CHANGE: f64 = 0.05;
pub const UNKNOWN_MAX_CHANGE: f64 = 0.08;

pub const UNKNOWN_MIN_BASE_PRICE: f64 = 10.0;
pub const UNKNOWN_MAX_BASE_PRICE: f64 = 100.0;

pub const KNOWN_MARKET_CAP_RANGE: (u64, u64) = (50_000_000_000, 500_000_000_000);
pub const UNKNOWN_MARKET_CAP_RANGE: (u64, u64) = (10_000_000_000, 200_000_000_000);

pub fn known_company(symbol: &str) -> Option<&'static KnownCompany> {
    KNOWN_COMPANIES.iter().find(|company| company.symbol == symbol)
}

pub fn simulate<S: AsRef<str>>(tickers: &[S]) -> QuoteMap {
    simulate_with(&mut rand::thread_rng(), tickers)
}

pub fn simulate_with<R, S>(rng: &mut R, tickers: &[S]) -> QuoteMap
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let mut result = QuoteMap::with_capacity(tickers.len());

    for ticker in tickers {
        let symbol = normalize_ticker(ticker.as_ref());
        let record = match known_company(&symbol) {
            Some(company) => simulate_known(rng, company),
            None => simulate_unknown(rng, &symbol),
        };
        result.insert(symbol, record);
    }

    info!("Generated simulated quotes for {} tickers", result.len());
    result
}

fn simulate_known<R: Rng + ?Sized>(rng: &mut R, company: &KnownCompany) -> QuoteRecord {
    let change = rng.gen_range(-KNOWN_MAX_CHANGE..=KNOWN_MAX_CHANGE);
    let (min_cap, max_cap) = KNOWN_MARKET_CAP_RANGE;

    QuoteRecord {
        symbol: company.symbol.to_string(),
        short_name: company.short_name.to_string(),
        long_name: company.long_name.to_string(),
        price: round2(company.base_price * (1.0 + change)),
        currency: DEFAULT_CURRENCY.to_string(),
        market_cap: Some(rng.gen_range(min_cap..=max_cap) as f64),
        change_percent: round2(change * 100.0),
        previous_close: company.base_price,
        valid: true,
        error: None,
    }
}

fn simulate_unknown<R: Rng + ?Sized>(rng: &mut R, symbol: &str) -> QuoteRecord {
    let base_price = rng.gen_range(UNKNOWN_MIN_BASE_PRICE..=UNKNOWN_MAX_BASE_PRICE);
    let change = rng.gen_range(-UNKNOWN_MAX_CHANGE..=UNKNOWN_MAX_CHANGE);
    let (min_cap, max_cap) = UNKNOWN_MARKET_CAP_RANGE;

    QuoteRecord {
        symbol: symbol.to_string(),
        short_name: format!("{} SIMULADO", symbol),
        long_name: format!("Empresa Simulada {}", symbol),
        price: round2(base_price * (1.0 + change)),
        currency: DEFAULT_CURRENCY.to_string(),
        market_cap: Some(rng.gen_range(min_cap..=max_cap) as f64),
        change_percent: round2(change * 100.0),
        previous_close: round2(base_price),
        valid: true,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_known_tickers_stay_near_base_price() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let quotes = simulate_with(&mut rng, &["PETR4", "vale3"]);
            let petr = &quotes["PETR4"];
            let vale = &quotes["VALE3"];

            assert_eq!(petr.short_name, "PETROBRAS PN");
            assert_eq!(petr.previous_close, 32.50);
            assert!(petr.price >= 30.87 && petr.price <= 34.13, "price {}", petr.price);
            assert!(petr.change_percent.abs() <= 5.0);
            assert_eq!(vale.long_name, "Vale S.A.");

            let cap = petr.market_cap.unwrap();
            assert!((50e9..=500e9).contains(&cap));
        }
    }

    #[test]
    fn test_unknown_tickers_use_generic_walk() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let quotes = simulate_with(&mut rng, &["XPTO3"]);
            let quote = &quotes["XPTO3"];

            assert!(quote.valid);
            assert_eq!(quote.short_name, "XPTO3 SIMULADO");
            assert_eq!(quote.long_name, "Empresa Simulada XPTO3");
            assert_eq!(quote.currency, "BRL");
            assert!(quote.previous_close >= 10.0 && quote.previous_close <= 100.0);
            assert!(quote.price >= 9.2 && quote.price <= 108.0, "price {}", quote.price);
            assert!(quote.change_percent.abs() <= 8.0);

            let cap = quote.market_cap.unwrap();
            assert!((10e9..=200e9).contains(&cap));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let tickers = ["ITUB4", "ABCD11"];
        let first = simulate_with(&mut StdRng::seed_from_u64(1), &tickers);
        let second = simulate_with(&mut StdRng::seed_from_u64(1), &tickers);

        assert_eq!(first, second);
        assert_eq!(first.keys().collect::<Vec<_>>(), vec!["ITUB4", "ABCD11"]);
    }

    #[test]
    fn test_change_percent_matches_price_move() {
        let mut rng = StdRng::seed_from_u64(99);
        let quotes = simulate_with(&mut rng, &["WEGE3"]);
        let quote = &quotes["WEGE3"];

        let implied = (quote.price - quote.previous_close) / quote.previous_close * 100.0;
        assert!((implied - quote.change_percent).abs() < 0.05);
    }
}
