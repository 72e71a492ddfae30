use blog_site::{run, AppConfig, AppError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // loads .env first so RUST_LOG from it is honoured
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blog_site=info,tower_http=info")),
        )
        .init();

    run(config).await
}
