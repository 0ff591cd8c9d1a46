//! Unified error system for the giveaway service
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type carrying a code and a client-facing message
//! - [`ErrorBody`]: The `{ "error": ... }` JSON body every failure renders as
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Member errors
//! - 2xxx: Book errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::DuplicatePhoneNumber);
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//!
//! let err = AppError::invalid_request("expected value at line 1 column 1");
//! assert_eq!(err.code, ErrorCode::InvalidRequest);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, ErrorBody};
