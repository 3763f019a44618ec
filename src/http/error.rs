//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::db::RepositoryError;

/// API error response body, `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// The requested student does not exist.
    pub fn student_not_found() -> Self {
        AppError::NotFound("Student not found".to_string())
    }

    /// The request body does not have the required shape.
    pub fn invalid_data() -> Self {
        AppError::BadRequest("Data is invalid".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidId(_) => {
                AppError::BadRequest("Invalid student id".to_string())
            }
            // Store faults surface as 500 with the error text verbatim.
            other => AppError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_id_maps_to_bad_request() {
        let err = AppError::from(RepositoryError::InvalidId("zzz".to_string()));
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid student id"));
    }

    #[test]
    fn test_backend_fault_keeps_error_text() {
        let err = AppError::from(RepositoryError::Backend("write refused".to_string()));
        assert!(matches!(err, AppError::Internal(msg) if msg == "write refused"));
    }
}
