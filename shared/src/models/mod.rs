//! Data models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Row ids are `i32` (PostgreSQL SERIAL / INTEGER).

pub mod book;
pub mod member;

// Re-exports
pub use book::*;
pub use member::*;
