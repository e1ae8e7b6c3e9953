use aether_core::AgentCreate;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use http::header;
use serde::Deserialize;

use crate::error::error_response;
use crate::state::AppState;

/// Handle `POST /api/agents`
pub async fn create(State(state): State<AppState>, Json(payload): Json<AgentCreate>) -> Response {
    match state.store.create_agent(payload) {
        Ok(agent) => {
            tracing::info!(agent = %agent.id, mode = %agent.mode, "agent created");
            Json(agent).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// Handle `GET /api/agents`
pub async fn list(State(state): State<AppState>) -> Response {
    Json(state.store.list_agents()).into_response()
}

/// Handle `GET /api/agents/{id}`
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_agent(&id) {
        Ok(agent) => Json(agent).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Handle `POST /api/agents/{id}/rotate-token`
pub async fn rotate_token(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.rotate_token(&id) {
        Ok(agent) => Json(agent).into_response(),
        Err(e) => error_response(&e),
    }
}

/// Query parameters for config generation
#[derive(Debug, Deserialize)]
pub struct ConfigQuery {
    /// Comma-separated signal names; unknown names are dropped
    #[serde(default)]
    signals: Option<String>,
    /// Override for the prometheus exporter port
    #[serde(default)]
    prometheus_port: Option<u16>,
}

/// Handle `GET /api/agents/{id}/config`
///
/// Returns the rendered collector configuration as YAML-dialect text.
pub async fn generate_config(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ConfigQuery>,
) -> Response {
    let requested: Vec<String> = query
        .signals
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect();

    match aether_synth::generate_config(state.store.as_ref(), &id, &requested, query.prometheus_port) {
        Ok(rendered) => ([(header::CONTENT_TYPE, "application/yaml")], rendered).into_response(),
        Err(e) => error_response(&e),
    }
}
