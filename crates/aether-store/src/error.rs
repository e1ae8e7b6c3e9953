use aether_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Resource store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested resource does not exist
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// An agent referenced sink ids that do not exist
    #[error("unknown sink ids: {}", ids.join(", "))]
    UnknownSinkIds { ids: Vec<String> },
}

impl HttpError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UnknownSinkIds { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::UnknownSinkIds { .. } => "validation_error",
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}
