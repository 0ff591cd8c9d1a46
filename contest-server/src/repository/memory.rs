use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use shared::{BookId, Member, NewMember, WinnerStatus};
use tokio::sync::Mutex;

use super::MemberRepository;
use crate::error::BoxError;

#[derive(Default)]
struct Tables {
    books: HashMap<BookId, i32>,
    members: Vec<Member>,
}

/// In-process `Members` / `Books` tables
///
/// Each trait call takes the lock once, so a registration interleaves with
/// others exactly as it would against PostgreSQL without transactions.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryRepository {
    /// Empty store with both books at the given stock
    pub fn with_stock(first: i32, second: i32) -> Self {
        let books = HashMap::from([(BookId::First, first), (BookId::Second, second)]);
        Self {
            tables: Arc::new(Mutex::new(Tables {
                books,
                members: Vec::new(),
            })),
        }
    }

    /// Add `count` synthetic members assigned to `book`
    pub async fn seed_members(&self, book: BookId, status: WinnerStatus, count: usize) {
        let mut tables = self.tables.lock().await;
        for _ in 0..count {
            let id = tables.members.len() as i32 + 1;
            tables.members.push(Member {
                members_id: id,
                members_name: format!("seed-{id}"),
                members_phone_number: format!("{:011}", 90_000_000_000u64 + id as u64),
                members_company: None,
                members_message: None,
                members_privacy_consent: None,
                members_book_id: book.id(),
                members_winner_status: status.as_str().to_string(),
            });
        }
    }

    /// Remove a book row entirely
    pub async fn remove_book(&self, book: BookId) {
        self.tables.lock().await.books.remove(&book);
    }

    pub async fn members(&self) -> Vec<Member> {
        self.tables.lock().await.members.clone()
    }

    pub async fn quantity(&self, book: BookId) -> Option<i32> {
        self.tables.lock().await.books.get(&book).copied()
    }
}

#[async_trait]
impl MemberRepository for MemoryRepository {
    async fn phone_number_exists(&self, phone_number: &str) -> Result<bool, BoxError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .members
            .iter()
            .any(|m| m.members_phone_number == phone_number))
    }

    async fn count_by_book(&self, book: BookId) -> Result<i64, BoxError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .members
            .iter()
            .filter(|m| m.members_book_id == book.id())
            .count() as i64)
    }

    async fn count_winners(&self) -> Result<i64, BoxError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .members
            .iter()
            .filter(|m| m.members_winner_status == WinnerStatus::Winner.as_str())
            .count() as i64)
    }

    async fn count_registered(&self) -> Result<i64, BoxError> {
        Ok(self.tables.lock().await.members.len() as i64)
    }

    async fn book_quantity(&self, book: BookId) -> Result<Option<i32>, BoxError> {
        Ok(self.tables.lock().await.books.get(&book).copied())
    }

    async fn insert_member(&self, member: &NewMember) -> Result<Option<Member>, BoxError> {
        let mut tables = self.tables.lock().await;
        let row = Member {
            members_id: tables.members.len() as i32 + 1,
            members_name: member.name.clone(),
            members_phone_number: member.phone_number.clone(),
            members_company: member.company.clone(),
            members_message: member.message.clone(),
            members_privacy_consent: None,
            members_book_id: member.book_id.id(),
            members_winner_status: member.winner_status.as_str().to_string(),
        };
        tables.members.push(row.clone());
        Ok(Some(row))
    }

    async fn decrement_book(&self, book: BookId) -> Result<(), BoxError> {
        if let Some(quantity) = self.tables.lock().await.books.get_mut(&book) {
            *quantity -= 1;
        }
        Ok(())
    }
}
