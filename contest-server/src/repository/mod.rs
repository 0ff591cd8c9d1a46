//! Store seam for the registration handler
//!
//! [`PgRepository`] runs against PostgreSQL through the `db` query functions;
//! [`MemoryRepository`] keeps the same two tables in process.

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use async_trait::async_trait;
use shared::{BookId, Member, NewMember};

use crate::error::BoxError;

/// The reads and writes one registration performs, in the order it performs them.
///
/// None of these run inside a transaction.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Whether any member already uses this phone number
    async fn phone_number_exists(&self, phone_number: &str) -> Result<bool, BoxError>;

    /// Members assigned to `book`
    async fn count_by_book(&self, book: BookId) -> Result<i64, BoxError>;

    /// Members with winner status `'O'`
    async fn count_winners(&self) -> Result<i64, BoxError>;

    /// All registered members
    async fn count_registered(&self) -> Result<i64, BoxError>;

    /// Remaining stock of `book`, `None` when the book row is missing
    async fn book_quantity(&self, book: BookId) -> Result<Option<i32>, BoxError>;

    /// Insert a member and return the stored row
    async fn insert_member(&self, member: &NewMember) -> Result<Option<Member>, BoxError>;

    /// Take one unit of `book` out of stock
    async fn decrement_book(&self, book: BookId) -> Result<(), BoxError>;
}
