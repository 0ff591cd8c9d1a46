//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 500 Internal Server Error
            Self::MemberNotSaved | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and business-rule errors)
            Self::InvalidRequest
            | Self::RequiredField
            | Self::InvalidPhoneNumber
            | Self::DuplicatePhoneNumber
            | Self::BookOutOfStock => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_status() {
        assert_eq!(
            ErrorCode::RequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidPhoneNumber.http_status(),
            StatusCode::BAD_REQUEST
        );
        // Duplicate phone is a plain 400, not 409
        assert_eq!(
            ErrorCode::DuplicatePhoneNumber.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::BookOutOfStock.http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::MemberNotSaved.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_malformed_body_status() {
        assert_eq!(
            ErrorCode::InvalidRequest.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
