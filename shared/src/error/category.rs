//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category derived from the leading digit of the error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Member errors (1xxx)
    Member,
    /// Book errors (2xxx)
    Book,
    /// System errors (9xxx, and anything unassigned)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Member,
            2000..3000 => Self::Book,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Member);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Book);
        assert_eq!(ErrorCategory::from_code(5000), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::DuplicatePhoneNumber.category(),
            ErrorCategory::Member
        );
        assert_eq!(ErrorCode::BookOutOfStock.category(), ErrorCategory::Book);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Book).unwrap();
        assert_eq!(json, "\"book\"");
    }
}
