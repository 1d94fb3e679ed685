//! Port interfaces for reference data

use async_trait::async_trait;
use usersvc_domain::{Category, Result, Topic};

/// Read-only access to the static reference collections.
///
/// An implementation that can tell "no rows" apart from other failures
/// reports it as `NotFound`.
#[async_trait]
pub trait ReferenceDataStore: Send + Sync {
    async fn list_topics(&self) -> Result<Vec<Topic>>;

    async fn list_categories(&self) -> Result<Vec<Category>>;
}
