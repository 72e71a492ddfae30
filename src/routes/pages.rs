use askama::Template;
use axum::{response::Html, routing::get, Router};

use crate::error::AppError;
use crate::templates::{AboutTemplate, ContactTemplate};

pub fn page_routes() -> Router {
    Router::new()
        .route("/about", get(about))
        .route("/contact", get(contact))
}

async fn about() -> Result<Html<String>, AppError> {
    Ok(Html(AboutTemplate.render()?))
}

async fn contact() -> Result<Html<String>, AppError> {
    Ok(Html(ContactTemplate.render()?))
}
