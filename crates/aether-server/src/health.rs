use axum::Json;
use axum::response::IntoResponse;

/// Service banner for `GET /api/`
pub async fn root_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "aether",
        "message": "aether control plane",
    }))
}

/// Health check handler
///
/// The store is process-local, so there is no dependency to probe.
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
