use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::error::Error;
use strum_macros::{AsRefStr, Display};

pub mod http;

/// The classification of an [`HttpException`].
///
/// The HTTP status is a pure function of the kind; a message override never
/// changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum ExceptionKind {
    NotFound,
    BadRequest,
    Conflict,
}

impl ExceptionKind {
    pub const fn status_code(self) -> StatusCode {
        match self {
            ExceptionKind::NotFound => StatusCode::NOT_FOUND,
            ExceptionKind::BadRequest => StatusCode::BAD_REQUEST,
            ExceptionKind::Conflict => StatusCode::CONFLICT,
        }
    }

    pub const fn default_message(self) -> &'static str {
        match self {
            ExceptionKind::NotFound => "Resource not found",
            ExceptionKind::BadRequest => "Bad request",
            ExceptionKind::Conflict => "Resource already exists",
        }
    }
}

/// A client error raised by a handler and rendered once at the boundary.
///
/// # Example
/// ```
/// use scaffolds::exception::{ExceptionKind, HttpException};
///
/// let err = HttpException::not_found();
/// assert_eq!(err.message(), "Resource not found");
///
/// let err = HttpException::conflict().with_message("Email already registered");
/// assert_eq!(err.kind(), ExceptionKind::Conflict);
/// assert_eq!(err.status_code().as_u16(), 409);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HttpException {
    kind: ExceptionKind,
    message: String,
}

impl HttpException {
    /// Create an exception carrying the kind's default message
    pub fn new(kind: ExceptionKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    /// Create an exception with a custom message
    pub fn with_detail(kind: ExceptionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(ExceptionKind::NotFound)
    }

    pub fn bad_request() -> Self {
        Self::new(ExceptionKind::BadRequest)
    }

    pub fn conflict() -> Self {
        Self::new(ExceptionKind::Conflict)
    }

    /// Replace the message, keeping the kind
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}

impl From<validator::ValidationErrors> for HttpException {
    fn from(errors: validator::ValidationErrors) -> Self {
        HttpException::bad_request().with_message(errors.to_string())
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        tracing::warn!(
            kind = %self.kind,
            status = self.status_code().as_u16(),
            message = %self.message,
            "http exception"
        );
        http::ErrorBody::new(self.status_code(), self.kind.as_ref(), self.message).into_response()
    }
}

/// The ExceptionFilter trait
///
/// Filters handle errors thrown during request processing.
/// They must return a valid Response.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Catch an exception and return a response
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use validator::Validate;

    #[test]
    fn test_default_messages() {
        assert_eq!(HttpException::not_found().message(), "Resource not found");
        assert_eq!(HttpException::bad_request().message(), "Bad request");
        assert_eq!(HttpException::conflict().message(), "Resource already exists");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(HttpException::not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(HttpException::bad_request().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(HttpException::conflict().status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_custom_message_keeps_status() {
        for kind in ExceptionKind::iter() {
            let err = HttpException::new(kind).with_message("custom detail");
            assert_eq!(err.message(), "custom detail");
            assert_eq!(err.kind(), kind);
            assert_eq!(err.status_code(), kind.status_code());

            let err = HttpException::with_detail(kind, "other detail");
            assert_eq!(err.message(), "other detail");
            assert_eq!(err.status_code(), kind.status_code());
        }
    }

    #[test]
    fn test_display_is_message() {
        let err = HttpException::not_found().with_message("User 7 not found");
        assert_eq!(err.to_string(), "User 7 not found");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ExceptionKind::NotFound.to_string(), "NotFound");
        assert_eq!(ExceptionKind::BadRequest.as_ref(), "BadRequest");
    }

    #[derive(Validate)]
    struct Contact {
        #[validate(email)]
        email: String,
    }

    #[test]
    fn test_from_validation_errors_is_bad_request() {
        let errors = Contact {
            email: "nope".to_string(),
        }
        .validate()
        .unwrap_err();

        let err = HttpException::from(errors);
        assert_eq!(err.kind(), ExceptionKind::BadRequest);
        assert!(err.message().contains("email"));
    }

    #[test]
    fn test_into_response_status() {
        let response = HttpException::conflict().into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
