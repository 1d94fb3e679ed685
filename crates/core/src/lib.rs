//! # usersvc Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for the profile and reference stores
//! - The profile read path, merge policy and mutation lifecycle
//! - The reference data provider
//!
//! ## Architecture Principles
//! - Only depends on `usersvc-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod reference;
pub mod user;

// Re-export specific items to avoid ambiguity
pub use reference::ports::ReferenceDataStore;
pub use reference::ReferenceDataProvider;
pub use user::ports::ProfileStore;
pub use user::{merger, ActivityFeed, ProfileAccessor, ProfileLifecycle};
