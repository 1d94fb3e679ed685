//! Privacy-gated profile reads

use std::sync::Arc;

use tracing::{error, info};
use usersvc_domain::constants::AUDIT_LOG_TARGET;
use usersvc_domain::{ProfileView, PublicProfile, Result, UserServiceError};

use super::ensure_exists;
use super::ports::ProfileStore;

/// Resolves the profile view a caller is allowed to see
pub struct ProfileAccessor {
    store: Arc<dyn ProfileStore>,
}

impl ProfileAccessor {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Get a profile by username.
    ///
    /// With `is_private == false` only the public subset is read. With
    /// `is_private == true` existence is confirmed first so that an absent
    /// user (`NotFound`) stays distinguishable from a failing fetch.
    pub async fn get_profile(&self, username: &str, is_private: bool) -> Result<ProfileView> {
        info!(
            target: AUDIT_LOG_TARGET,
            username,
            view = if is_private { "full" } else { "public" },
            "user has requested profile info"
        );

        if is_private {
            self.full_view(username).await
        } else {
            self.public_view(username).await
        }
    }

    async fn public_view(&self, username: &str) -> Result<ProfileView> {
        let profile: Option<PublicProfile> =
            self.store.get_public_profile(username).await.inspect_err(|err| {
                error!(username, error = %err, "error while finding the public profile");
            })?;

        profile.map(ProfileView::Public).ok_or_else(|| {
            error!(username, "the user doesn't exist");
            UserServiceError::user_not_found(username)
        })
    }

    async fn full_view(&self, username: &str) -> Result<ProfileView> {
        ensure_exists(self.store.as_ref(), username).await?;

        let profile = self.store.get_full_profile(username).await.inspect_err(|err| {
            error!(username, error = %err, "error while finding the user profile");
        })?;

        // The row can disappear between the existence check and the fetch.
        profile
            .map(|full| ProfileView::Full(full.into()))
            .ok_or_else(|| UserServiceError::user_not_found(username))
    }
}
