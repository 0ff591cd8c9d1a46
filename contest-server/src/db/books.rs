use shared::{Book, BookId};
use sqlx::PgPool;

pub async fn find_by_id(pool: &PgPool, book: BookId) -> Result<Option<Book>, sqlx::Error> {
    sqlx::query_as("SELECT books_id, books_quantity FROM Books WHERE books_id = $1")
        .bind(book.id())
        .fetch_optional(pool)
        .await
}

/// Unconditional decrement; a concurrent registration can drive the quantity below zero
pub async fn decrement_quantity(pool: &PgPool, book: BookId) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE Books SET books_quantity = books_quantity - 1 WHERE books_id = $1")
        .bind(book.id())
        .execute(pool)
        .await?;
    Ok(())
}
