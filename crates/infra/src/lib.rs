//! # usersvc Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite connection pooling and schema bootstrap
//! - Repositories backing the profile and reference-data ports
//! - Configuration loading from the environment and files
//!
//! ## Architecture
//! - Implements traits defined in `usersvc-core`
//! - Contains all "impure" code (I/O, SQLite)

pub mod config;
pub mod database;
pub mod errors;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
