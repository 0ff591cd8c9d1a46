//! Member Model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::book::BookId;

/// Prize outcome recorded on a member row: `'O'` winner, `'X'` not a winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WinnerStatus {
    #[serde(rename = "O")]
    Winner,
    #[serde(rename = "X")]
    #[default]
    NotWinner,
}

impl WinnerStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winner => "O",
            Self::NotWinner => "X",
        }
    }
}

impl fmt::Display for WinnerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Member row (`Members` table)
///
/// Field names mirror the column names so the row decodes without renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub members_id: i32,
    pub members_name: String,
    pub members_phone_number: String,
    pub members_company: Option<String>,
    pub members_message: Option<String>,
    /// Always NULL on insert; collected elsewhere
    pub members_privacy_consent: Option<bool>,
    pub members_book_id: i32,
    pub members_winner_status: String,
}

/// Insert payload for a new member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub phone_number: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub book_id: BookId,
    pub winner_status: WinnerStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&WinnerStatus::Winner).unwrap(),
            "\"O\""
        );
        assert_eq!(
            serde_json::to_string(&WinnerStatus::NotWinner).unwrap(),
            "\"X\""
        );
        let parsed: WinnerStatus = serde_json::from_str("\"O\"").unwrap();
        assert_eq!(parsed, WinnerStatus::Winner);
    }

    #[test]
    fn test_winner_status_default_and_display() {
        assert_eq!(WinnerStatus::default(), WinnerStatus::NotWinner);
        assert_eq!(WinnerStatus::Winner.to_string(), "O");
        assert_eq!(WinnerStatus::NotWinner.to_string(), "X");
    }
}
