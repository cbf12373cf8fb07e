use axum::{extract::Path, extract::State, http::StatusCode, Json};

use crate::app_state::AppState;
use crate::database::models::{present, Action, ActionPatch, NewAction};
use crate::error::{self, ApiError};

/// GET /api/actions - list every action across all projects
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Action>>, ApiError> {
    let actions = state.actions.all().await.map_err(|e| {
        tracing::error!("action list failed: {}", e);
        ApiError::internal(error::UNABLE_TO_RETRIEVE_ACTIONS)
    })?;
    Ok(Json(actions))
}

/// GET /api/actions/:action_id
pub async fn get(
    State(state): State<AppState>,
    Path(action_id): Path<i64>,
) -> Result<Json<Action>, ApiError> {
    let action = state.actions.find(action_id).await.map_err(|e| {
        tracing::error!("action fetch failed: {}", e);
        ApiError::internal(error::UNABLE_TO_RETRIEVE_ACTION)
    })?;

    match action {
        Some(action) => Ok(Json(action)),
        None => Err(ApiError::not_found(error::ACTION_NOT_FOUND)),
    }
}

/// POST /api/projects/:project_id/actions - create an action under the
/// given project. The store refuses the insert when the project is missing,
/// which maps to the project-not-found payload.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(body): Json<NewAction>,
) -> Result<(StatusCode, Json<Action>), ApiError> {
    if !present(&body.description) || !present(&body.notes) {
        return Err(ApiError::bad_request(error::ACTION_FIELDS_REQUIRED));
    }
    let description = body.description.as_deref().unwrap_or_default();
    let notes = body.notes.as_deref().unwrap_or_default();
    let completed = body.completed.unwrap_or(false);

    let inserted = state
        .actions
        .insert_for_project(project_id, description, notes, completed)
        .await
        .map_err(|e| {
            tracing::error!("action insert failed: {}", e);
            ApiError::internal(error::UNABLE_TO_CREATE_ACTION)
        })?;

    match inserted {
        Some(action) => Ok((StatusCode::CREATED, Json(action))),
        None => Err(ApiError::not_found(error::PROJECT_NOT_FOUND)),
    }
}

/// PUT /api/actions/:action_id - partial update with the same presence
/// rules as project update. project_id is immutable and not part of the
/// patch surface.
pub async fn update(
    State(state): State<AppState>,
    Path(action_id): Path<i64>,
    Json(patch): Json<ActionPatch>,
) -> Result<Json<Action>, ApiError> {
    let updated = state.actions.update(action_id, patch).await.map_err(|e| {
        tracing::error!("action update failed: {}", e);
        ApiError::internal(error::UNABLE_TO_UPDATE_ACTION)
    })?;

    match updated {
        Some(action) => Ok(Json(action)),
        None => Err(ApiError::not_found(error::ACTION_NOT_FOUND)),
    }
}

/// DELETE /api/actions/:action_id
pub async fn remove(
    State(state): State<AppState>,
    Path(action_id): Path<i64>,
) -> Result<Json<Action>, ApiError> {
    let removed = state.actions.remove(action_id).await.map_err(|e| {
        tracing::error!("action delete failed: {}", e);
        ApiError::internal(error::UNABLE_TO_DELETE_ACTION)
    })?;

    match removed {
        Some(action) => Ok(Json(action)),
        None => Err(ApiError::not_found(error::ACTION_NOT_FOUND)),
    }
}
