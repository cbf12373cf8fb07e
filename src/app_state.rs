use sqlx::{Pool, Sqlite};

use crate::database::{self, actions::ActionStore, projects::ProjectStore, StoreError};

/// Shared handles passed into every handler via `axum::extract::State`.
#[derive(Clone)]
pub struct AppState {
    pool: Pool<Sqlite>,
    pub projects: ProjectStore,
    pub actions: ActionStore,
}

impl AppState {
    /// Open the database, run migrations, and wire up the stores.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = database::connect(database_url).await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: Pool<Sqlite>) -> Self {
        Self {
            projects: ProjectStore::new(pool.clone()),
            actions: ActionStore::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}
