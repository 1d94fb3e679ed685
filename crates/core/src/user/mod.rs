//! User profile access and mutation

pub mod accessor;
pub mod activity;
pub mod lifecycle;
pub mod merger;
pub mod ports;

pub use accessor::ProfileAccessor;
pub use activity::ActivityFeed;
pub use lifecycle::ProfileLifecycle;

use tracing::error;
use usersvc_domain::{Result, UserServiceError};

use self::ports::ProfileStore;

/// Fail with `NotFound` unless `username` exists in the store.
pub(crate) async fn ensure_exists(store: &dyn ProfileStore, username: &str) -> Result<()> {
    if store.username_exists(username).await? {
        Ok(())
    } else {
        error!(username, "the user doesn't exist");
        Err(UserServiceError::user_not_found(username))
    }
}
