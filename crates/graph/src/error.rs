//! Error types for the graph client

use thiserror::Error;

/// Result type alias using GraphError
pub type Result<T> = std::result::Result<T, GraphError>;

/// Graph client error types
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("session could not be established: {message}")]
    Session {
        message: String,
        code: Option<i64>,
    },

    #[error("API error ({kind}): {message}")]
    Api {
        kind: String,
        code: Option<i64>,
        message: String,
    },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field in response: {0}")]
    MissingField(&'static str),
}

impl GraphError {
    /// Collapse any failure into a session error, keeping the upstream
    /// message and code where the failure carried one.
    pub(crate) fn into_session_error(self) -> GraphError {
        match self {
            GraphError::Session { .. } => self,
            GraphError::Api { code, message, .. } => GraphError::Session { message, code },
            other => GraphError::Session {
                message: other.to_string(),
                code: None,
            },
        }
    }
}
