//! Error types and the JSON error body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// The message is what the client sees; the code drives the HTTP status
/// and the log category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Create an internal error with the generic client message
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError)
    }
}

/// JSON body of every error response: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.message.clone(),
        }
    }
}

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from(&self);

        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::BookOutOfStock);
        assert_eq!(err.code, ErrorCode::BookOutOfStock);
        assert_eq!(err.message, "The selected book is out of stock");
    }

    #[test]
    fn test_app_error_with_message() {
        let err = AppError::invalid_request("bad input");
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "bad input");
        assert_eq!(format!("{}", err), "bad input");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::new(ErrorCode::DuplicatePhoneNumber).http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::internal().http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_serialize() {
        let err = AppError::new(ErrorCode::InvalidPhoneNumber);
        let json = serde_json::to_value(ErrorBody::from(&err)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Phone number must be exactly 11 digits" })
        );
    }

    #[test]
    fn test_into_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorCode::RequiredField).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::internal().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
