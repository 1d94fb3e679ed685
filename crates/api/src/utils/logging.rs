use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use usersvc_domain::{LoggingConfig, UserServiceError};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `config.level` when set. `config.json` switches the
/// output to one JSON object per line.
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;
    let registry = tracing_subscriber::registry().with(filter);

    if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    Ok(())
}

/// Log the outcome of a request with structured fields.
///
/// # Parameters
/// * `command` - Logical operation identifier (e.g. `"users::get_user_profile"`).
/// * `elapsed` - Duration the request took.
/// * `error` - The failure, if the request did not succeed.
///
/// Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_request_execution(command: &str, elapsed: Duration, error: Option<&UserServiceError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "request_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = err.label(),
            error = %err,
            "request_execution_failure"
        ),
    }
}
