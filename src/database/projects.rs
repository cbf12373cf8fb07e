use sqlx::{Pool, Sqlite};

use crate::database::models::{Project, ProjectPatch};
use crate::database::StoreError;

/// Persistence for project records. Every operation resolves to a uniform
/// `Result`, with `Option` standing in for "no such id".
#[derive(Clone)]
pub struct ProjectStore {
    pool: Pool<Sqlite>,
}

impl ProjectStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, completed FROM projects ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            "SELECT id, name, description, completed FROM projects WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn insert(
        &self,
        name: &str,
        description: &str,
        completed: bool,
    ) -> Result<Project, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            "INSERT INTO projects (name, description, completed)
             VALUES (?, ?, ?)
             RETURNING id, name, description, completed",
        )
        .bind(name)
        .bind(description)
        .bind(completed)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Merge the supplied fields into an existing row. Absent patch fields
    /// keep their stored value via COALESCE.
    pub async fn update(&self, id: i64, patch: ProjectPatch) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            "UPDATE projects
             SET name        = COALESCE(?, name),
                 description = COALESCE(?, description),
                 completed   = COALESCE(?, completed)
             WHERE id = ?
             RETURNING id, name, description, completed",
        )
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete and hand back the removed record in one statement, so there is
    /// no window between a fetch and the delete.
    pub async fn remove(&self, id: i64) -> Result<Option<Project>, StoreError> {
        let row = sqlx::query_as::<_, Project>(
            "DELETE FROM projects WHERE id = ?
             RETURNING id, name, description, completed",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect;

    async fn store() -> ProjectStore {
        let pool = connect("sqlite::memory:").await.expect("in-memory db");
        ProjectStore::new(pool)
    }

    #[tokio::test]
    async fn insert_assigns_ids_and_defaults() {
        let store = store().await;
        let a = store.insert("Garden", "Plant tomatoes", false).await.unwrap();
        let b = store.insert("Garage", "Clear shelves", false).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(!a.completed);
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let store = store().await;
        let created = store.insert("Garden", "Plant tomatoes", false).await.unwrap();

        let patch = ProjectPatch { completed: Some(true), ..Default::default() };
        let updated = store.update(created.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.name, "Garden");
        assert_eq!(updated.description, "Plant tomatoes");
        assert!(updated.completed);

        // completed: false is a present value and must be applied
        let patch = ProjectPatch { completed: Some(false), ..Default::default() };
        let reverted = store.update(created.id, patch).await.unwrap().unwrap();
        assert!(!reverted.completed);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_none() {
        let store = store().await;
        let patch = ProjectPatch { name: Some("x".into()), ..Default::default() };
        assert!(store.update(999, patch).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_returns_the_old_record_once() {
        let store = store().await;
        let created = store.insert("Garden", "Plant tomatoes", false).await.unwrap();

        let removed = store.remove(created.id).await.unwrap().unwrap();
        assert_eq!(removed, created);
        assert!(store.remove(created.id).await.unwrap().is_none());
        assert!(store.find(created.id).await.unwrap().is_none());
    }
}
