use aether_core::HttpError;
use axum::Json;
use axum::response::{IntoResponse, Response};

/// Convert a domain error into a JSON error response
pub fn error_response(error: &dyn HttpError) -> Response {
    let status = error.status_code();
    let body = serde_json::json!({
        "error": {
            "type": error.error_type(),
            "message": error.client_message(),
        }
    });

    (status, Json(body)).into_response()
}
