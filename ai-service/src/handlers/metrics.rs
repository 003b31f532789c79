use crate::services::get_metrics;
use axum::{http::StatusCode, response::IntoResponse};

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        get_metrics(),
    )
}
