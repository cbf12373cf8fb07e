// HTTP API error types and the fixed client-facing message texts.
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

// Project messages
pub const UNABLE_TO_RETRIEVE_PROJECTS: &str = "Unable to retrieve projects.";
pub const UNABLE_TO_RETRIEVE_PROJECT: &str = "Unable to retrieve project.";
pub const UNABLE_TO_CREATE_PROJECT: &str = "Unable to create project.";
pub const UNABLE_TO_UPDATE_PROJECT: &str = "Unable to update project.";
pub const UNABLE_TO_DELETE_PROJECT: &str = "Unable to delete project.";
pub const PROJECT_NOT_FOUND: &str = "Unable to find a project with the specified project Id.";
pub const PROJECT_FIELDS_REQUIRED: &str =
    "Please provide a name and description when creating a project.";

// Action messages. The not-found text says "project"; that wording is part
// of the published contract and is kept verbatim.
pub const UNABLE_TO_RETRIEVE_ACTIONS: &str = "Unable to retrieve actions.";
pub const UNABLE_TO_RETRIEVE_ACTION: &str = "Unable to retrieve action.";
pub const UNABLE_TO_CREATE_ACTION: &str = "Unable to create action.";
pub const UNABLE_TO_UPDATE_ACTION: &str = "Unable to update action.";
pub const UNABLE_TO_DELETE_ACTION: &str = "Unable to delete action.";
pub const ACTION_NOT_FOUND: &str = "Unable to find a project with the specified action Id.";
pub const ACTION_FIELDS_REQUIRED: &str =
    "Please provide notes and a description when creating an action.";

/// HTTP API error with the status code and fixed message the client sees.
/// Store detail never rides along; handlers log it and pick one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(&'static str),

    // 404 Not Found
    NotFound(&'static str),

    // 500 Internal Server Error
    Internal(&'static str),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Internal(msg) => msg,
        }
    }

    pub fn bad_request(message: &'static str) -> Self {
        ApiError::BadRequest(message)
    }

    pub fn not_found(message: &'static str) -> Self {
        ApiError::NotFound(message)
    }

    pub fn internal(message: &'static str) -> Self {
        ApiError::Internal(message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({ "errorMessage": self.message() });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_variants() {
        assert_eq!(ApiError::bad_request(PROJECT_FIELDS_REQUIRED).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found(PROJECT_NOT_FOUND).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal(UNABLE_TO_RETRIEVE_PROJECTS).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn message_is_the_fixed_text() {
        let err = ApiError::not_found(ACTION_NOT_FOUND);
        assert_eq!(err.message(), "Unable to find a project with the specified action Id.");
    }
}
