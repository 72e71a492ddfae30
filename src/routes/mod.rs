use std::sync::Arc;

use axum::{response::IntoResponse, Router};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::error::not_found_page;

pub mod blog;
pub mod pages;

pub fn create_all_routes(db: Arc<DatabaseConnection>) -> Router {
    Router::new()
        .merge(blog::blog_routes(db))
        .merge(pages::page_routes())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

async fn fallback() -> impl IntoResponse {
    not_found_page()
}
