use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Top-level task-tracking entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub completed: bool,
}

/// Sub-task belonging to exactly one project. `project_id` is set at
/// creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Action {
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    pub notes: String,
    pub completed: bool,
}

/// Create-project request body. `name` and `description` are required but
/// arrive as `Option` so the handler can answer 400 instead of letting the
/// JSON layer reject the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Partial project update. Absent fields are left untouched; a present
/// `completed: false` IS applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Create-action request body; the owning project id comes from the path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAction {
    pub description: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

/// Partial action update; same presence rules as [`ProjectPatch`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionPatch {
    pub description: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

/// Presence check for required string fields: empty strings count as
/// missing, matching the API's original behavior.
pub fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}
