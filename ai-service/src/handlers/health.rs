use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Readiness probe. There are no downstream dependencies to wait on.
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}
