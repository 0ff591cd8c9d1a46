use shared::{BookId, Member, NewMember, WinnerStatus};
use sqlx::PgPool;

pub async fn find_by_phone_number(
    pool: &PgPool,
    phone_number: &str,
) -> Result<Vec<Member>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM Members WHERE members_phone_number = $1")
        .bind(phone_number)
        .fetch_all(pool)
        .await
}

pub async fn count_by_book(pool: &PgPool, book: BookId) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM Members WHERE members_book_id = $1")
        .bind(book.id())
        .fetch_one(pool)
        .await
}

pub async fn count_winners(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM Members WHERE members_winner_status = $1")
        .bind(WinnerStatus::Winner.as_str())
        .fetch_one(pool)
        .await
}

pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM Members")
        .fetch_one(pool)
        .await
}

/// Insert a member; privacy consent is always stored as NULL
pub async fn create(pool: &PgPool, member: &NewMember) -> Result<Option<Member>, sqlx::Error> {
    sqlx::query_as(
        "INSERT INTO Members (members_name, members_phone_number, members_company, members_message,
                              members_privacy_consent, members_book_id, members_winner_status)
         VALUES ($1, $2, $3, $4, NULL, $5, $6)
         RETURNING *",
    )
    .bind(&member.name)
    .bind(&member.phone_number)
    .bind(member.company.as_deref())
    .bind(member.message.as_deref())
    .bind(member.book_id.id())
    .bind(member.winner_status.as_str())
    .fetch_optional(pool)
    .await
}
