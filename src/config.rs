use std::{env, net::SocketAddr};

use dotenv::dotenv;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://posts.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5003";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads `DATABASE_URL` and `BIND_ADDR`, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self::new(database_url, &bind_addr)
    }

    pub fn new(database_url: String, bind_addr: &str) -> Result<Self, AppError> {
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| AppError::Config(format!("invalid BIND_ADDR `{bind_addr}`")))?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}
