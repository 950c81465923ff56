use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid configuration for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    #[error("Telemetry initialisation failed: {0}")]
    Telemetry(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScaffoldError {
    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }
}

impl IntoResponse for ScaffoldError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "unhandled server error");
        crate::exception::http::ErrorBody::new(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "InternalServerError",
            self.to_string(),
        )
        .into_response()
    }
}
