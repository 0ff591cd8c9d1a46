//! contest-server — book giveaway registration service
//!
//! Registers participants, assigns each one of two books under a per-book
//! soft cap, and draws a winner status against a fixed winner budget.
//! State lives in PostgreSQL (`Members`, `Books`).

pub mod allocation;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod repository;
pub mod state;

pub use config::Config;
pub use state::AppState;
