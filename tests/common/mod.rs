use anyhow::Result;
use axum::{
    body::Body,
    http::{self, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use projects_api::{app, app_state::AppState};

/// Build the full router over a fresh in-memory database. Each test gets an
/// isolated store; requests against the same `Router` value share it.
pub async fn test_app() -> Result<Router> {
    let state = AppState::connect("sqlite::memory:").await?;
    Ok(app(state))
}

/// Drive one request through the router and decode the JSON body (Null when
/// the body is empty).
pub async fn send(
    app: &Router,
    method: http::Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => Request::builder().method(method).uri(uri).body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

pub async fn get(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    send(app, http::Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    send(app, http::Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    send(app, http::Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Result<(StatusCode, Value)> {
    send(app, http::Method::DELETE, uri, None).await
}
