use sqlx::{Pool, Sqlite};

use crate::database::models::{Action, ActionPatch};
use crate::database::StoreError;

#[derive(Clone)]
pub struct ActionStore {
    pool: Pool<Sqlite>,
}

impl ActionStore {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Action>, StoreError> {
        let rows = sqlx::query_as::<_, Action>(
            "SELECT id, project_id, description, notes, completed
             FROM actions ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Action>, StoreError> {
        let row = sqlx::query_as::<_, Action>(
            "SELECT id, project_id, description, notes, completed
             FROM actions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Insert an action under `project_id`. The parent-existence check and
    /// the insert are one statement; `None` means the project does not
    /// exist. Parent existence is only ever checked here, never on later
    /// reads or updates.
    pub async fn insert_for_project(
        &self,
        project_id: i64,
        description: &str,
        notes: &str,
        completed: bool,
    ) -> Result<Option<Action>, StoreError> {
        let row = sqlx::query_as::<_, Action>(
            "INSERT INTO actions (project_id, description, notes, completed)
             SELECT ?1, ?2, ?3, ?4
             WHERE EXISTS (SELECT 1 FROM projects WHERE id = ?1)
             RETURNING id, project_id, description, notes, completed",
        )
        .bind(project_id)
        .bind(description)
        .bind(notes)
        .bind(completed)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i64, patch: ActionPatch) -> Result<Option<Action>, StoreError> {
        let row = sqlx::query_as::<_, Action>(
            "UPDATE actions
             SET description = COALESCE(?, description),
                 notes       = COALESCE(?, notes),
                 completed   = COALESCE(?, completed)
             WHERE id = ?
             RETURNING id, project_id, description, notes, completed",
        )
        .bind(patch.description)
        .bind(patch.notes)
        .bind(patch.completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn remove(&self, id: i64) -> Result<Option<Action>, StoreError> {
        let row = sqlx::query_as::<_, Action>(
            "DELETE FROM actions WHERE id = ?
             RETURNING id, project_id, description, notes, completed",
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
    use crate::database::{connect, projects::ProjectStore};

    async fn stores() -> (ProjectStore, ActionStore) {
        let pool = connect("sqlite::memory:").await.expect("in-memory db");
        (ProjectStore::new(pool.clone()), ActionStore::new(pool))
    }

    #[tokio::test]
    async fn insert_requires_existing_parent() {
        let (projects, actions) = stores().await;

        assert!(actions
            .insert_for_project(42, "water plants", "use the green can", false)
            .await
            .unwrap()
            .is_none());

        let project = projects.insert("Garden", "Plant tomatoes", false).await.unwrap();
        let action = actions
            .insert_for_project(project.id, "water plants", "use the green can", false)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(action.project_id, project.id);
        assert!(!action.completed);
    }

    #[tokio::test]
    async fn parent_is_not_revalidated_after_creation() {
        let (projects, actions) = stores().await;
        let project = projects.insert("Garden", "Plant tomatoes", false).await.unwrap();
        let action = actions
            .insert_for_project(project.id, "water plants", "use the green can", false)
            .await
            .unwrap()
            .unwrap();

        projects.remove(project.id).await.unwrap();

        // Orphaned actions stay readable and updatable
        assert!(actions.find(action.id).await.unwrap().is_some());
        let patch = ActionPatch { completed: Some(true), ..Default::default() };
        assert!(actions.update(action.id, patch).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let (projects, actions) = stores().await;
        let project = projects.insert("Garden", "Plant tomatoes", false).await.unwrap();
        let action = actions
            .insert_for_project(project.id, "water plants", "use the green can", false)
            .await
            .unwrap()
            .unwrap();

        let patch = ActionPatch { notes: Some("use the hose".into()), ..Default::default() };
        let updated = actions.update(action.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.description, "water plants");
        assert_eq!(updated.notes, "use the hose");
        assert_eq!(updated.project_id, project.id);
    }
}
