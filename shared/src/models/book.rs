//! Book Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two giveaway book SKUs (`books_id` 1 or 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum BookId {
    First,
    Second,
}

impl BookId {
    /// Database id
    pub const fn id(&self) -> i32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

impl From<BookId> for i32 {
    fn from(book: BookId) -> Self {
        book.id()
    }
}

impl TryFrom<i32> for BookId {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(format!("invalid book id: {other}")),
        }
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Book row (`Books` table)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Book {
    pub books_id: i32,
    pub books_quantity: i32,
}
