//! User profile types
//!
//! A stored profile is always read as a [`FullProfile`]; what leaves the
//! service is a [`ProfileView`] chosen by the caller's privacy flag.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DELETE_SUCCESS_MESSAGE, DELETE_SUCCESS_STATUS};

/// Complete stored profile record, keyed by `username`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullProfile {
    pub account_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub user_status: String,
    /// Row version used for optimistic concurrency on update.
    pub version: i64,
}

/// Subset of a profile that any caller may see
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<&FullProfile> for PublicProfile {
    fn from(profile: &FullProfile) -> Self {
        Self {
            username: profile.username.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

/// Full profile as returned to a privileged caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullProfileView {
    pub account_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub user_status: String,
}

impl From<FullProfile> for FullProfileView {
    fn from(profile: FullProfile) -> Self {
        Self {
            account_id: profile.account_id,
            username: profile.username,
            first_name: profile.first_name,
            last_name: profile.last_name,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            date_of_birth: profile.date_of_birth,
            address: profile.address,
            contact_number: profile.contact_number,
            user_status: profile.user_status,
        }
    }
}

/// Profile representation selected by the privacy gate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileView {
    Full(FullProfileView),
    Public(PublicProfile),
}

/// Requested changes to a stored profile
///
/// `None` means "leave unchanged". `Some` carries the new value, including
/// an explicit empty string for optional attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// RFC 3339 date-time text, see [`crate::constants::DATE_TIME_FORMAT`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

/// Result of a successful update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSummary {
    pub username: String,
}

/// Confirmation of a successful deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub success: String,
    pub status: String,
}

impl DeleteConfirmation {
    pub fn deleted() -> Self {
        Self {
            success: DELETE_SUCCESS_MESSAGE.to_string(),
            status: DELETE_SUCCESS_STATUS.to_string(),
        }
    }
}
