//! Profile mutation lifecycle
//!
//! Every mutation confirms the username exists before touching the store.
//! Updates read the stored version and hand it back to the store, which
//! rejects the write with `Conflict` if another update landed in between.

use std::sync::Arc;

use tracing::{debug, error, info};
use usersvc_domain::{DeleteConfirmation, ProfileUpdate, Result, UpdateSummary, UserServiceError};

use super::ensure_exists;
use super::merger;
use super::ports::ProfileStore;

/// Sequences existence checks, merge and persistence for profile mutations
pub struct ProfileLifecycle {
    store: Arc<dyn ProfileStore>,
}

impl ProfileLifecycle {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Update the profile stored under `username`.
    ///
    /// A partial update merges `update` into the stored record; a full update
    /// replaces the mutable attributes (see [`merger::replace`]).
    ///
    /// # Errors
    /// `NotFound` when the user does not exist, `InvalidInput` when the
    /// request does not merge, `Conflict` when a concurrent write won.
    pub async fn update(
        &self,
        username: &str,
        update: ProfileUpdate,
        partial: bool,
    ) -> Result<UpdateSummary> {
        info!(username, partial, "user is updating the profile");

        ensure_exists(self.store.as_ref(), username).await?;

        let existing = self
            .store
            .get_full_profile(username)
            .await
            .inspect_err(|err| {
                error!(username, error = %err, "error while finding the user profile");
            })?
            .ok_or_else(|| UserServiceError::user_not_found(username))?;

        let updated = if partial {
            merger::merge(existing, &update)?
        } else {
            merger::replace(existing, &update)?
        };
        debug!(username, version = updated.version, "profile merged");

        let resulting_username = updated.username.clone();
        self.store.update_profile(username, updated).await.inspect_err(|err| {
            error!(username, error = %err, "could not update the user profile");
        })?;

        Ok(UpdateSummary { username: resulting_username })
    }

    /// Delete the profile stored under `username`.
    ///
    /// Deleting an absent username fails with `NotFound`; the operation is
    /// not idempotent.
    pub async fn delete(&self, username: &str) -> Result<DeleteConfirmation> {
        info!(username, "user has requested to delete the profile");

        ensure_exists(self.store.as_ref(), username).await?;

        self.store.delete_profile(username).await.inspect_err(|err| {
            error!(username, error = %err, "could not delete the user profile");
        })?;

        Ok(DeleteConfirmation::deleted())
    }
}
