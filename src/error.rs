use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sea_orm::DbErr;

use crate::templates::NotFoundTemplate;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),
    #[error("record not found")]
    NotFound,
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => not_found_page().into_response(),
            err => {
                tracing::error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

pub fn not_found_page() -> (StatusCode, Html<String>) {
    let body = NotFoundTemplate
        .render()
        .unwrap_or_else(|_| "Not Found".to_string());
    (StatusCode::NOT_FOUND, Html(body))
}
