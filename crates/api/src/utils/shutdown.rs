//! Graceful shutdown trigger for the HTTP server

use std::future::Future;
use std::io;

/// Resolve once the process receives Ctrl+C.
pub async fn shutdown_signal() {
    wait_for(tokio::signal::ctrl_c()).await;
}

/// Resolve when `signal` fires. If the signal handler cannot be installed the
/// server keeps running rather than stopping at once.
pub async fn wait_for<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "cannot listen for shutdown signal, continuing to serve");
            std::future::pending::<()>().await;
        }
    }
}
