//! Error codes for the giveaway service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Member errors
//! - 2xxx: Book errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so logs and clients can match on a stable number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Request body could not be parsed
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Member ====================
    /// Phone number is not exactly 11 digits
    InvalidPhoneNumber = 1001,
    /// Phone number already registered
    DuplicatePhoneNumber = 1002,
    /// Member row was not returned by the insert
    MemberNotSaved = 1003,

    // ==================== 2xxx: Book ====================
    /// Assigned book has no stock left
    BookOutOfStock = 2001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the client-facing message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Name and phone number are required",

            // Member
            ErrorCode::InvalidPhoneNumber => "Phone number must be exactly 11 digits",
            ErrorCode::DuplicatePhoneNumber => "This phone number has already entered",
            ErrorCode::MemberNotSaved => "Failed to save member information",

            // Book
            ErrorCode::BookOutOfStock => "The selected book is out of stock",

            // System
            ErrorCode::InternalError => "Failed to save member information",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),

            1001 => Ok(ErrorCode::InvalidPhoneNumber),
            1002 => Ok(ErrorCode::DuplicatePhoneNumber),
            1003 => Ok(ErrorCode::MemberNotSaved),

            2001 => Ok(ErrorCode::BookOutOfStock),

            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
