//! Shared test helpers for `usersvc-core` integration tests.
//!
//! In-memory store implementations so the core components can be exercised
//! without a database.

pub mod logs;
pub mod repositories;
