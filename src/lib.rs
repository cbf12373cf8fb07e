use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod app_state;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;

use app_state::AppState;

/// Build the full application router. Store handles are injected through
/// `AppState` so handlers never reach for globals.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(project_routes())
        .merge(action_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn project_routes() -> Router<AppState> {
    use handlers::{actions, projects};

    Router::new()
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/:project_id",
            get(projects::get).put(projects::update).delete(projects::remove),
        )
        // Actions are scoped under their parent project at creation only
        .route("/api/projects/:project_id/actions", axum::routing::post(actions::create))
}

fn action_routes() -> Router<AppState> {
    use handlers::actions;

    Router::new()
        .route("/api/actions", get(actions::list))
        .route(
            "/api/actions/:action_id",
            get(actions::get).put(actions::update).delete(actions::remove),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Projects API",
        "version": version,
        "endpoints": {
            "projects": "/api/projects[/:project_id]",
            "actions": "/api/actions[/:action_id]",
            "create_action": "/api/projects/:project_id/actions",
        }
    }))
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    match database::health_check(state.pool()).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({ "status": "ok", "database": "ok" })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({ "status": "degraded", "database_error": e.to_string() })),
        ),
    }
}
