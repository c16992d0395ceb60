//! Ledger chat bot - service entry point.
//!
//! # Startup Flow
//!
//! 1. Initialise logging
//! 2. Load configuration from environment variables
//! 3. Create the in-memory ledger
//! 4. Build the HTTP router and start serving

use std::sync::Arc;

use ledger_chat_bot::{
    app::{self, AppState},
    config::Config,
    services::ledger_service::{Ledger, SystemClock},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG, defaults to "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        port = config.server_port,
        signed = config.webhook_secret.is_some(),
        "Configuration loaded"
    );
    if config.webhook_secret.is_none() {
        tracing::warn!("WEBHOOK_SECRET not set, inbound messages are accepted unsigned");
    }

    // State is process-local and lost on restart
    let ledger = Ledger::new(Arc::new(SystemClock), config.utc_offset()?);
    let state = AppState::new(ledger, config.webhook_secret.clone());

    let app = app::router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
