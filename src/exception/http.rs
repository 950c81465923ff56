use crate::error::ScaffoldError;
use crate::exception::{ExceptionFilter, ExceptionKind, HttpException};
use crate::pipe::PipeError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::error::Error;

/// JSON body written for every error leaving the web-api boundary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
    pub message: String,
    pub timestamp: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ErrorBody {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            error: error.into(),
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            status,
        }
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// A default exception filter that handles the crate's error types
#[derive(Default)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        let error = match error.downcast::<HttpException>() {
            Ok(exception) => return (*exception).into_response(),
            Err(other) => other,
        };

        let body = if let Some(pipe_error) = error.downcast_ref::<PipeError>() {
            match pipe_error {
                PipeError::Validation(msg) | PipeError::Transformation(msg) => {
                    return HttpException::with_detail(ExceptionKind::BadRequest, msg.clone())
                        .into_response();
                }
                PipeError::Internal(_) => internal(pipe_error.to_string()),
            }
        } else if let Some(errors) = error.downcast_ref::<validator::ValidationErrors>() {
            return HttpException::from(errors.clone()).into_response();
        } else if let Some(scaffold_error) = error.downcast_ref::<ScaffoldError>() {
            internal(scaffold_error.to_string())
        } else {
            internal("Internal Server Error".to_string())
        };

        tracing::error!(error = %error, "exception intercepted");
        body.into_response()
    }
}

fn internal(message: String) -> ErrorBody {
    ErrorBody::new(StatusCode::INTERNAL_SERVER_ERROR, "InternalServerError", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_http_exception_passes_through() {
        let filter = HttpExceptionFilter;
        let response = filter.catch(Box::new(HttpException::not_found()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["error"], "NotFound");
        assert_eq!(json["message"], "Resource not found");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_pipe_validation_is_bad_request() {
        let filter = HttpExceptionFilter;
        let response = filter.catch(Box::new(PipeError::Validation("Invalid integer".to_string())));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Invalid integer");
    }

    #[tokio::test]
    async fn test_scaffold_error_is_server_error() {
        let filter = HttpExceptionFilter;
        let response = filter.catch(Box::new(ScaffoldError::Internal("db down".to_string())));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Internal error: db down");
    }

    #[tokio::test]
    async fn test_unknown_error_is_hidden() {
        let filter = HttpExceptionFilter;
        let io = std::io::Error::other("disk on fire");
        let response = filter.catch(Box::new(io));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Internal Server Error");
        assert_eq!(json["error"], "InternalServerError");
    }
}
