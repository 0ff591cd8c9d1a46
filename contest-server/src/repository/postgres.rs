use async_trait::async_trait;
use shared::{BookId, Member, NewMember};
use sqlx::PgPool;

use super::MemberRepository;
use crate::db;
use crate::error::BoxError;

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgRepository {
    async fn phone_number_exists(&self, phone_number: &str) -> Result<bool, BoxError> {
        let rows = db::members::find_by_phone_number(&self.pool, phone_number).await?;
        Ok(!rows.is_empty())
    }

    async fn count_by_book(&self, book: BookId) -> Result<i64, BoxError> {
        Ok(db::members::count_by_book(&self.pool, book).await?)
    }

    async fn count_winners(&self) -> Result<i64, BoxError> {
        Ok(db::members::count_winners(&self.pool).await?)
    }

    async fn count_registered(&self) -> Result<i64, BoxError> {
        Ok(db::members::count_all(&self.pool).await?)
    }

    async fn book_quantity(&self, book: BookId) -> Result<Option<i32>, BoxError> {
        let row = db::books::find_by_id(&self.pool, book).await?;
        Ok(row.map(|b| b.books_quantity))
    }

    async fn insert_member(&self, member: &NewMember) -> Result<Option<Member>, BoxError> {
        Ok(db::members::create(&self.pool, member).await?)
    }

    async fn decrement_book(&self, book: BookId) -> Result<(), BoxError> {
        Ok(db::books::decrement_quantity(&self.pool, book).await?)
    }
}
