use aether_core::ProjectCreate;
use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use crate::error::error_response;
use crate::state::AppState;

/// Handle `POST /api/projects`
pub async fn create(State(state): State<AppState>, Json(payload): Json<ProjectCreate>) -> Response {
    let project = state.store.create_project(payload);
    tracing::info!(project = %project.id, "project created");
    Json(project).into_response()
}

/// Handle `GET /api/projects`
pub async fn list(State(state): State<AppState>) -> Response {
    Json(state.store.list_projects()).into_response()
}

/// Handle `GET /api/projects/{id}`
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.get_project(&id) {
        Ok(project) => Json(project).into_response(),
        Err(e) => error_response(&e),
    }
}
