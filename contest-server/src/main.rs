use std::net::SocketAddr;

use contest_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contest_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Starting contest-server (env: {}, book cap: {}, winners: {}/{})",
        config.environment,
        config.policy.book_soft_cap,
        config.policy.winner_budget,
        config.policy.participant_cap
    );

    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("contest-server HTTP listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("contest-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
