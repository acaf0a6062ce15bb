// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;

use actix_web::web;
use log::info;
use quote_service::QuoteSource;
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    use handlers::{api_quotes, health_check, index, not_found};

    cfg.service(index)
        .service(api_quotes)
        .service(health_check)
        .default_service(web::route().to(not_found));
}

pub fn quote_source<S: QuoteSource + 'static>(source: S) -> web::Data<dyn QuoteSource> {
    let source: Arc<dyn QuoteSource> = Arc::new(source);
    web::Data::from(source)
}

pub async fn run_server(config: config::Config) -> std::io::Result<()> {
    use actix_web::{middleware, App, HttpServer};
    use quote_service::QuoteFetcher;
    use std::io;

    let fetcher = QuoteFetcher::new(&config.provider_url, config.provider_timeout)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    let source = quote_source(fetcher);

    info!(
        "Quote provider at {} (timeout {}s)",
        config.provider_url,
        config.provider_timeout.as_secs()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(source.clone())
            .configure(configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
