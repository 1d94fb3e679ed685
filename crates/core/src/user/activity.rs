//! User activity feed

use tracing::info;
use usersvc_domain::{Result, UserActivities};

/// Serves the activity history endpoint.
///
/// No activity source exists yet, so every request gets an empty feed.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActivityFeed;

impl ActivityFeed {
    pub fn new() -> Self {
        Self
    }

    pub async fn get_user_activities(&self, email: &str) -> Result<UserActivities> {
        info!(email, "trying to fetch user activities");
        Ok(UserActivities::default())
    }
}
