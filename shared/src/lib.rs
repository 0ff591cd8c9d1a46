//! Shared types for the book giveaway service
//!
//! Error codes and error bodies, domain models for members and books,
//! and the request/response payloads of the registration API.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use error::{AppError, ErrorCode};
pub use models::{Book, BookId, Member, NewMember, WinnerStatus};
