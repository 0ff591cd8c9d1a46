//! Response types for the registration API

use serde::{Deserialize, Serialize};

use crate::models::{BookId, WinnerStatus};

/// Success message returned with every registration
pub const REGISTERED_MESSAGE: &str = "Member information saved and a book has been assigned";

/// `POST /api/members` success body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterMemberResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
    pub book_id: BookId,
    pub winner_status: WinnerStatus,
}

impl RegisterMemberResponse {
    pub fn new(user_id: i32, book_id: BookId, winner_status: WinnerStatus) -> Self {
        Self {
            message: REGISTERED_MESSAGE.to_string(),
            user_id,
            book_id,
            winner_status,
        }
    }
}
