//! Demo request handlers
//!
//! Each endpoint fails a different way so every dispatcher branch can be
//! exercised from curl.

use std::time::Duration;

use axum::extract::Path;
use axum::Json;
use serde::Serialize;
use triage_core::{DomainError, InvalidArgument, ValidationFailure};
use triage_http::CaughtError;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// User with this id
#[derive(Serialize)]
pub struct User {
    id: u64,
    name: String,
}

/// Looks up a user; no users exist, so id 0 trips the argument check and
/// everything else comes back 404
pub async fn get_user(Path(id): Path<u64>) -> Result<Json<User>, CaughtError> {
    tracing::info!(id, "looking up user");

    if id == 0 {
        return Err(InvalidArgument("id must be positive".to_string()).into());
    }

    Err(DomainError::not_found(format!("User {id} not found")).into())
}

/// Rejects every widget with a structured validation failure
pub async fn create_widget() -> Result<Json<serde_json::Value>, CaughtError> {
    let failure = ValidationFailure::from_fields([
        ("name", "must not be blank"),
        ("age", "must be positive"),
    ]);
    Err(failure.into())
}

/// Fails with a foreign error so the catch-all branch fires
pub async fn boom() -> Result<Json<serde_json::Value>, CaughtError> {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    Err(err.into())
}

/// Sleeps past the timeout layer so the middleware error path fires
pub async fn slow() -> Json<serde_json::Value> {
    tokio::time::sleep(Duration::from_secs(5)).await;
    Json(serde_json::json!({"ok": true}))
}
