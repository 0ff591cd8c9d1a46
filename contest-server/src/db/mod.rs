//! Database access layer (PostgreSQL)

pub mod books;
pub mod members;
