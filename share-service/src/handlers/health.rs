use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "share-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Ready once the store directory is reachable.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match tokio::fs::metadata(&state.config.storage.path).await {
        Ok(meta) if meta.is_dir() => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}
