//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! service.

/// Human-readable name of the format `date_of_birth` values must follow on
/// update requests. Values are parsed as RFC 3339 date-times.
pub const DATE_TIME_FORMAT: &str = "RFC 3339 (e.g. 1990-05-17T00:00:00Z)";

/// Confirmation text returned after a successful profile deletion.
pub const DELETE_SUCCESS_MESSAGE: &str = "user has been deleted successfully";

/// Status code carried in the deletion confirmation.
pub const DELETE_SUCCESS_STATUS: &str = "200";

/// Status assigned to accounts that have not been suspended or scheduled for
/// removal.
pub const DEFAULT_USER_STATUS: &str = "active";

// Server defaults
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 50051;

// Database defaults
pub const DEFAULT_DB_PATH: &str = "usersvc.db";
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;
pub const DB_BUSY_TIMEOUT_MS: u64 = 5_000;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Tracing target used for profile access audit entries.
pub const AUDIT_LOG_TARGET: &str = "usersvc::audit";
