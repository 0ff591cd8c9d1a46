//! Application state

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

use crate::allocation::ContestPolicy;
use crate::config::Config;
use crate::error::BoxError;
use crate::repository::{MemberRepository, PgRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Members / Books store
    pub repo: Arc<dyn MemberRepository>,
    /// Book quota and winner budget
    pub policy: ContestPolicy,
}

impl AppState {
    /// Connect to PostgreSQL, run migrations, and build the state
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect(&config.database_url)
            .await?;

        tracing::info!("Connected to PostgreSQL");

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::with_repository(
            Arc::new(PgRepository::new(pool)),
            config.policy,
        ))
    }

    /// Build the state over any store
    pub fn with_repository(repo: Arc<dyn MemberRepository>, policy: ContestPolicy) -> Self {
        Self { repo, policy }
    }
}
