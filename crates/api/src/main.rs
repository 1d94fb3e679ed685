//! usersvc - user profile service
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use usersvc_api::utils::logging::init_tracing;
use usersvc_api::utils::shutdown::shutdown_signal;
use usersvc_api::{build_router, AppContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration so it can override the process env
    let dotenv = dotenvy::dotenv();

    let config = usersvc_infra::config::load().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise tracing")?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let bind_address = config.server.bind_address();
    let ctx = Arc::new(AppContext::new(&config).context("failed to build application context")?);
    let app = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;
    tracing::info!(address = %bind_address, "usersvc listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    tracing::info!("usersvc stopped");
    Ok(())
}
