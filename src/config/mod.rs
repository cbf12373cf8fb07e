use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

/// Default listening port for the projects server.
const DEFAULT_PORT: u16 = 4242;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://projects.db".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(5);

        Self { port, database_url, max_connections }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

/// Global config accessor, initialized from the environment on first use.
pub fn config() -> &'static AppConfig {
    &CONFIG
}
