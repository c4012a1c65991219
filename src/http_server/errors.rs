//! # API Errors
//!
//! Every handler failure becomes `{"message": ...}` with a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::MessageResponse;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Application-level failures
#[derive(Debug, Error)]
pub enum ApiError {
    /// Lookup miss; the message is returned verbatim
    #[error("{0}")]
    NotFound(&'static str),

    /// Malformed input
    #[error("{0}")]
    BadRequest(String),

    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Store failure. Details are logged, not returned.
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ApiError> for MessageResponse {
    fn from(err: ApiError) -> Self {
        MessageResponse::new(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            tracing::error!(error = %e, "database error");
        }

        let status = self.status_code();
        let body = Json(MessageResponse::from(self));
        (status, body).into_response()
    }
}
