//! # usersvc API
//!
//! HTTP application layer - request handlers and service wiring.
//!
//! This crate contains:
//! - Request handlers (HTTP/JSON → core services)
//! - Application context (dependency injection)
//! - Router, error mapping and the `usersvc` binary
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes the profile contract over axum

pub mod commands;
pub mod context;
pub mod error;
pub mod extract;
pub mod router;
pub mod utils;

// Re-export for convenience
pub use context::*;
pub use error::ApiError;
pub use router::build_router;
