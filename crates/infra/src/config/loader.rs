//! Configuration loader
//!
//! Loads service configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from a discovered file
//! 3. If no file exists anywhere, uses built-in defaults
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `USERSVC_DB_PATH`: Database file path (required for env loading)
//! - `USERSVC_SERVER_PORT`: Listener port (required for env loading)
//! - `USERSVC_SERVER_HOST`: Listener host
//! - `USERSVC_DB_POOL_SIZE`: Connection pool size
//! - `USERSVC_LOG_LEVEL`: Default tracing filter
//! - `USERSVC_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches `usersvc.{json,toml}` and `config.{json,toml}` in the
//! working directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};

use usersvc_domain::{Config, DatabaseConfig, LoggingConfig, Result, ServerConfig, UserServiceError};

const CONFIG_FILE_NAMES: [&str; 4] = ["usersvc.json", "usersvc.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `UserServiceError::Config` if a config file is found but cannot be
/// read or parsed. Missing sources are not an error.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match discover_config_paths() {
                Some(path) => load_from_file(Some(path)),
                None => {
                    tracing::info!("No configuration file found, using defaults");
                    Ok(Config::default())
                }
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `USERSVC_DB_PATH` and `USERSVC_SERVER_PORT` must be present; the other
/// variables fall back to their defaults.
///
/// # Errors
/// Returns `UserServiceError::Config` if required variables are missing
/// or any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let db_path = env_var("USERSVC_DB_PATH")?;
    let port = env_var("USERSVC_SERVER_PORT").and_then(|s| {
        s.parse::<u16>().map_err(|e| UserServiceError::Config(format!("Invalid server port: {e}")))
    })?;

    let server_defaults = ServerConfig::default();
    let host = std::env::var("USERSVC_SERVER_HOST").unwrap_or(server_defaults.host);

    let pool_size = match std::env::var("USERSVC_DB_POOL_SIZE") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|e| UserServiceError::Config(format!("Invalid pool size: {e}")))?,
        Err(_) => DatabaseConfig::default().pool_size,
    };

    let logging_defaults = LoggingConfig::default();
    let level = std::env::var("USERSVC_LOG_LEVEL").unwrap_or(logging_defaults.level);
    let json = env_bool("USERSVC_LOG_JSON", logging_defaults.json);

    Ok(Config {
        server: ServerConfig { host, port },
        database: DatabaseConfig { path: db_path, pool_size },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations.
///
/// # Errors
/// Returns `UserServiceError::Config` if the file is missing, unreadable, or
/// malformed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(UserServiceError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => discover_config_paths().ok_or_else(|| {
            UserServiceError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| UserServiceError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content, detecting the format by extension.
pub(crate) fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| UserServiceError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| UserServiceError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(UserServiceError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Search the standard locations for a configuration file
///
/// Returns the first existing candidate, or `None`.
pub fn discover_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        UserServiceError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
