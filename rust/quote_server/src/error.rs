// src/error.rs

use crate::render;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Página não encontrada")]
    NotFound,
    #[error("Erro interno do servidor")]
    Render(#[from] std::fmt::Error),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = self.to_string();
        let body = render::error_page(status.as_u16(), &message).unwrap_or(message);

        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }
}
