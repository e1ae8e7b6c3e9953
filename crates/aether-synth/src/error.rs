use aether_core::HttpError;
use http::StatusCode;
use thiserror::Error;

/// Errors from config generation
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The referenced agent does not exist in the store
    #[error("agent not found: {agent}")]
    AgentNotFound { agent: String },
}

impl HttpError for GenerateError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::AgentNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::AgentNotFound { .. } => "not_found",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::AgentNotFound { agent } => format!("agent not found: {agent}"),
        }
    }
}
