use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use thiserror::Error;

pub mod actions;
pub mod models;
pub mod projects;

/// Errors surfaced by the store layer. Handlers log these and map them to a
/// fixed-message HTTP response; the detail never reaches the client.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Open (creating if missing) the sqlite database and run migrations.
pub async fn connect(database_url: &str) -> Result<Pool<Sqlite>, StoreError> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // An in-memory sqlite database exists per connection; cap the pool at
    // one so every query sees the same database.
    let max_connections = if database_url.contains(":memory:") {
        1
    } else {
        crate::config::config().max_connections
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

pub async fn health_check(pool: &Pool<Sqlite>) -> Result<(), StoreError> {
    let _: i64 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
    Ok(())
}
