// tests/integration_tests.rs

use mockito::{mock, Matcher};
use quote_service::client::DEFAULT_TIMEOUT;
use quote_service::QuoteFetcher;
use std::error::Error;
use std::time::Duration;

fn fetcher() -> Result<QuoteFetcher, Box<dyn Error>> {
    Ok(QuoteFetcher::new(&mockito::server_url(), DEFAULT_TIMEOUT)?)
}

#[tokio::test]
async fn test_fetch_parses_provider_results() -> Result<(), Box<dyn Error>> {
    let mock_server_response = r#"
    {
        "results": [
            {
                "symbol": "BBAS3",
                "shortName": "BANCO BRASIL ON",
                "longName": "Banco do Brasil S.A.",
                "currency": "BRL",
                "regularMarketPrice": 105.0,
                "regularMarketPreviousClose": 100.0,
                "marketCap": 150000000000
            },
            {
                "symbol": "ITUB4",
                "shortName": "ITAUUNIBANCO PN",
                "regularMarketPrice": 31.5,
                "regularMarketPreviousClose": 35.0
            }
        ],
        "requestedAt": "2024-09-18T17:00:00.000Z",
        "took": "0ms"
    }"#;

    let _mock = mock("GET", "/quote/BBAS3,ITUB4")
        .match_query(Matcher::UrlEncoded("fundamental".into(), "false".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_server_response)
        .create();

    let quotes = fetcher()?.fetch(&[" bbas3", "ITUB4 ", ""]).await;

    assert_eq!(quotes.keys().collect::<Vec<_>>(), vec!["BBAS3", "ITUB4"]);

    let bbas = &quotes["BBAS3"];
    assert!(bbas.valid);
    assert_eq!(bbas.short_name, "BANCO BRASIL ON");
    assert_eq!(bbas.long_name, "Banco do Brasil S.A.");
    assert_eq!(bbas.price, 105.0);
    assert_eq!(bbas.previous_close, 100.0);
    assert_eq!(bbas.change_percent, 5.0);
    assert_eq!(bbas.market_cap, Some(150_000_000_000.0));

    let itub = &quotes["ITUB4"];
    assert!(itub.valid);
    assert_eq!(itub.long_name, "ITAUUNIBANCO PN");
    assert_eq!(itub.currency, "BRL");
    assert_eq!(itub.change_percent, -10.0);
    assert_eq!(itub.market_cap, None);

    Ok(())
}

#[tokio::test]
async fn test_fetch_marks_missing_ticker_invalid() -> Result<(), Box<dyn Error>> {
    let _mock = mock("GET", "/quote/WEGE3,NOPE4")
        .match_query(Matcher::UrlEncoded("fundamental".into(), "false".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": [{"symbol": "WEGE3", "regularMarketPrice": 45.3}]}"#)
        .create();

    let quotes = fetcher()?.fetch(&["WEGE3", "nope4"]).await;

    assert_eq!(quotes.len(), 2);
    assert!(quotes["WEGE3"].valid);
    assert_eq!(quotes["WEGE3"].change_percent, 0.0);

    let missing = &quotes["NOPE4"];
    assert!(!missing.valid);
    assert_eq!(missing.error.as_deref(), Some("Ativo não encontrado"));
    assert_eq!(missing.long_name, "Ativo não encontrado: NOPE4");
    assert_eq!(missing.price, 0.0);

    Ok(())
}

#[tokio::test]
async fn test_fetch_falls_back_on_server_error() -> Result<(), Box<dyn Error>> {
    let _mock = mock("GET", "/quote/MGLU3,ZZZZ3")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create();

    let quotes = fetcher()?.fetch(&["MGLU3", "ZZZZ3"]).await;

    assert_eq!(quotes.len(), 2);
    assert!(quotes.values().all(|quote| quote.valid && quote.error.is_none()));
    assert_eq!(quotes["MGLU3"].short_name, "MAGAZ LUIZA ON");
    assert_eq!(quotes["MGLU3"].previous_close, 8.90);
    assert_eq!(quotes["ZZZZ3"].short_name, "ZZZZ3 SIMULADO");

    Ok(())
}

#[tokio::test]
async fn test_fetch_falls_back_on_malformed_payload() -> Result<(), Box<dyn Error>> {
    let _mock = mock("GET", "/quote/RENT3")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>definitely not json</html>")
        .create();

    let quotes = fetcher()?.fetch(&["RENT3"]).await;

    assert!(quotes["RENT3"].valid);
    assert_eq!(quotes["RENT3"].long_name, "Localiza Rent a Car S.A.");

    Ok(())
}

#[tokio::test]
async fn test_fetch_falls_back_when_provider_unreachable() -> Result<(), Box<dyn Error>> {
    let fetcher = QuoteFetcher::new("http://127.0.0.1:1", Duration::from_secs(2))?;

    let quotes = fetcher.fetch(&["PETR4", "UNKNOWNX"]).await;

    assert_eq!(quotes.len(), 2);
    let petr = &quotes["PETR4"];
    assert!(petr.valid);
    assert!(petr.price >= 30.87 && petr.price <= 34.13);
    let unknown = &quotes["UNKNOWNX"];
    assert!(unknown.valid);
    assert!(unknown.change_percent.abs() <= 8.0);

    Ok(())
}

#[tokio::test]
async fn test_fetch_empty_input_makes_no_request() -> Result<(), Box<dyn Error>> {
    let fetcher = QuoteFetcher::new("http://127.0.0.1:1", Duration::from_secs(2))?;

    let quotes = fetcher.fetch(&["", "   "]).await;

    assert!(quotes.is_empty());
    Ok(())
}
