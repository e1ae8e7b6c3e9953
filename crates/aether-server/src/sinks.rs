use aether_core::SinkCreate;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::error_response;
use crate::state::AppState;

/// Handle `POST /api/sinks`
///
/// An unsupported sink type never reaches this handler; it fails
/// deserialization of [`SinkCreate`] at the extractor.
pub async fn create(State(state): State<AppState>, Json(payload): Json<SinkCreate>) -> Response {
    let sink = state.store.create_sink(payload);
    tracing::info!(sink = %sink.id, kind = %sink.kind, "sink created");
    Json(sink).into_response()
}

/// Handle `GET /api/sinks`
pub async fn list(State(state): State<AppState>) -> Response {
    Json(state.store.list_sinks()).into_response()
}

/// Handle `GET /api/sinks/{id}`
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_sink(&id) {
        Ok(sink) => Json(sink).into_response(),
        Err(e) => error_response(&e),
    }
}
