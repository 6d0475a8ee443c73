//! malo-id-generator
//!
//! Serves freshly generated, checksum-valid example identifiers (MaLo, NeLo,
//! MeLo, TR, SR) as HTML and JSON. The family is chosen via
//! `ID_TYPE_TO_GENERATE`.

use anyhow::{Context, Result};
use malo_id_generator::{api, config, state::AppState};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = config::Config::from_env()?;

    // Initialize tracing (prefer RUST_LOG, fallback to MALO_LOG_LEVEL)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting malo-id-generator");
    info!(
        listen_addr = %config.listen_addr,
        id_type = config.id_type.as_deref().unwrap_or("<unset>"),
        "Configuration loaded"
    );

    let state = AppState::new(config.clone()).context("Failed to parse page templates")?;
    if let Err(e) = state.generator() {
        warn!(error = %e, "Requests will fail until {} is fixed", config::ID_TYPE_VAR);
    }

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "Listening for connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Received shutdown signal");
            }
        })
        .await?;

    info!("malo-id-generator shutdown complete");
    Ok(())
}
