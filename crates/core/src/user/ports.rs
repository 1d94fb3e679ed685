//! Port interfaces for user profile management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for user profile operations.

use async_trait::async_trait;
use usersvc_domain::{FullProfile, PublicProfile, Result};

/// Trait for user profile persistence and retrieval
///
/// Implementations must be safe for many concurrent callers; the core holds a
/// single shared handle and never locks around it.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Check whether an account with this username exists
    async fn username_exists(&self, username: &str) -> Result<bool>;

    /// Get the public subset of a profile by username
    async fn get_public_profile(&self, username: &str) -> Result<Option<PublicProfile>>;

    /// Get the complete stored profile by username
    async fn get_full_profile(&self, username: &str) -> Result<Option<FullProfile>>;

    /// Overwrite the profile stored under `username` with `profile`.
    ///
    /// `profile.version` must equal the stored version; the store bumps it on
    /// success. A mismatch fails with `Conflict`, an absent row with
    /// `NotFound`. `profile.username` may differ from `username` (rename).
    async fn update_profile(&self, username: &str, profile: FullProfile) -> Result<()>;

    /// Delete the profile stored under `username`
    async fn delete_profile(&self, username: &str) -> Result<()>;
}
