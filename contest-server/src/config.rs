//! Server configuration

use std::str::FromStr;

use crate::allocation::ContestPolicy;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Contest server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// Maximum pooled PostgreSQL connections
    pub db_max_connections: u32,
    /// Book quota and winner budget
    pub policy: ContestPolicy,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ContestPolicy::default();

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .filter(|s| !s.is_empty())
                .ok_or("DATABASE_URL must be set")?,
            http_port: parse_or(&lookup, "HTTP_PORT", 8080),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5),
            policy: ContestPolicy {
                book_soft_cap: parse_or(&lookup, "BOOK_SOFT_CAP", defaults.book_soft_cap),
                winner_budget: parse_or(&lookup, "WINNER_BUDGET", defaults.winner_budget),
                participant_cap: parse_or(&lookup, "PARTICIPANT_CAP", defaults.participant_cap),
            },
        })
    }
}

/// Parse a variable, falling back to `default` when unset or malformed
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
