use axum::{extract::Path, extract::State, http::StatusCode, Json};

use crate::app_state::AppState;
use crate::database::models::{present, NewProject, Project, ProjectPatch};
use crate::error::{self, ApiError};

/// GET /api/projects - list every project
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.projects.all().await.map_err(|e| {
        tracing::error!("project list failed: {}", e);
        ApiError::internal(error::UNABLE_TO_RETRIEVE_PROJECTS)
    })?;
    Ok(Json(projects))
}

/// GET /api/projects/:project_id
pub async fn get(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Project>, ApiError> {
    let project = state.projects.find(project_id).await.map_err(|e| {
        tracing::error!("project fetch failed: {}", e);
        ApiError::internal(error::UNABLE_TO_RETRIEVE_PROJECT)
    })?;

    match project {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::not_found(error::PROJECT_NOT_FOUND)),
    }
}

/// POST /api/projects - requires name and description, completed defaults
/// to false. No store call happens when validation fails.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    if !present(&body.name) || !present(&body.description) {
        return Err(ApiError::bad_request(error::PROJECT_FIELDS_REQUIRED));
    }
    let name = body.name.as_deref().unwrap_or_default();
    let description = body.description.as_deref().unwrap_or_default();
    let completed = body.completed.unwrap_or(false);

    let project = state.projects.insert(name, description, completed).await.map_err(|e| {
        tracing::error!("project insert failed: {}", e);
        ApiError::internal(error::UNABLE_TO_CREATE_PROJECT)
    })?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/:project_id - partial update; absent fields are left
/// untouched, present fields (including completed: false) are applied.
pub async fn update(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(patch): Json<ProjectPatch>,
) -> Result<Json<Project>, ApiError> {
    let updated = state.projects.update(project_id, patch).await.map_err(|e| {
        tracing::error!("project update failed: {}", e);
        ApiError::internal(error::UNABLE_TO_UPDATE_PROJECT)
    })?;

    match updated {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::not_found(error::PROJECT_NOT_FOUND)),
    }
}

/// DELETE /api/projects/:project_id - responds with the record as it was
/// immediately before deletion.
pub async fn remove(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Project>, ApiError> {
    let removed = state.projects.remove(project_id).await.map_err(|e| {
        tracing::error!("project delete failed: {}", e);
        ApiError::internal(error::UNABLE_TO_DELETE_PROJECT)
    })?;

    match removed {
        Some(project) => Ok(Json(project)),
        None => Err(ApiError::not_found(error::PROJECT_NOT_FOUND)),
    }
}
