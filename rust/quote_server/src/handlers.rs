// src/handlers.rs

use crate::error::AppError;
use crate::models::{
    ApiQuery, FailureResponse, HealthResponse, IndexQuery, MissingParamResponse, QueryPairs,
    QuotesResponse,
};
use crate::render::{self, IndexPage};
use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Local;
use log::{error, info};
use quote_service::models::split_tickers;
use quote_service::{QuoteMap, QuoteRecord, QuoteSource};
use validator::Validate;

#[get("/")]
pub async fn index(
    pairs: web::Query<QueryPairs>,
    source: web::Data<dyn QuoteSource>,
) -> Result<HttpResponse, AppError> {
    let query = IndexQuery::from_pairs(&pairs);
    let selection = query.selection();

    let mut quotes = QuoteMap::new();
    let mut error_message = String::new();

    if !selection.tickers.is_empty() {
        info!("Fetching quotes for: {}", selection.tickers.join(", "));
        match source.quotes(&selection.tickers).await {
            Ok(result) => quotes = result,
            // The brapi fetcher recovers on its own; other sources may not
            Err(err) => {
                error_message = format!("Erro ao buscar cotações: {}", err);
                error!("{}", error_message);
            }
        }
    }

    let (valid, invalid): (Vec<&QuoteRecord>, Vec<&QuoteRecord>) =
        quotes.values().partition(|quote| quote.valid);
    let updated_at = Local::now().format("%d/%m/%Y %H:%M:%S").to_string();

    let page = IndexPage {
        quotes: valid,
        invalid,
        ativos: query.ativos.as_deref().unwrap_or_default(),
        search_query: &selection.search_query,
        error_message: &error_message,
        total: quotes.len(),
        updated_at: &updated_at,
    };

    let body = render::index_page(&page).map_err(|err| {
        error!("Failed to render index page: {}", err);
        AppError::from(err)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

#[get("/api/cotacoes")]
pub async fn api_quotes(
    pairs: web::Query<QueryPairs>,
    source: web::Data<dyn QuoteSource>,
) -> impl Responder {
    let query = ApiQuery::from_pairs(&pairs);
    if query.validate().is_err() {
        return HttpResponse::BadRequest().json(MissingParamResponse::default());
    }

    let tickers = split_tickers(&query.tickers);

    match source.quotes(&tickers).await {
        Ok(quotes) => HttpResponse::Ok().json(QuotesResponse {
            success: true,
            total: quotes.len(),
            data: quotes,
        }),
        Err(err) => {
            error!("API error: {}", err);
            HttpResponse::InternalServerError().json(FailureResponse {
                success: false,
                error: err.to_string(),
            })
        }
    }
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
