//! Entry point for the StorySafari server.
//!
//! Startup order: logging → configuration → store connection (fails fast if
//! the cluster is unreachable) → router → serve. The store client lives in
//! [`AppState`] for the whole process; handlers share it and it is released
//! when the process exits.

use storysafari_server::{app, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default: info level globally, debug for this crate.
    // Override with RUST_LOG.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storysafari_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded for {:?} environment", config.environment);

    let state = AppState::new(&config).await?;

    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("StorySafari server listening on {}", bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
