use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tokio::net::TcpListener;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_all_routes;

/// Opens the database and brings its schema up to date.
pub async fn connect(database_url: &str) -> Result<Arc<DatabaseConnection>, AppError> {
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;

    Ok(Arc::new(db))
}

pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let db = connect(&config.database_url).await?;
    let app = create_all_routes(db);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
