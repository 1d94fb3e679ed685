//! User activity feed types

use serde::{Deserialize, Serialize};

/// Activity history for an account. The feed is not backed by any store yet,
/// so it is always returned empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivities {
    pub activities: Vec<String>,
}
