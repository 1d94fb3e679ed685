//! Profile merge policy
//!
//! Combines a stored [`FullProfile`] with a [`ProfileUpdate`]. Identity
//! (`account_id`), lifecycle (`user_status`) and `version` always come from
//! the stored record.

use chrono::{DateTime, Utc};
use usersvc_domain::constants::DATE_TIME_FORMAT;
use usersvc_domain::{FullProfile, ProfileUpdate, Result, UserServiceError};

/// Apply a partial update.
///
/// Every field present in `update` overwrites the stored value; absent
/// fields keep it. No field is ever cleared, and applying the same update
/// twice yields the same record as applying it once.
///
/// # Errors
/// `InvalidInput` when `date_of_birth` does not parse or a required field
/// (`username`, `first_name`, `last_name`) is given as blank text.
pub fn merge(mut existing: FullProfile, update: &ProfileUpdate) -> Result<FullProfile> {
    if let Some(username) = required(update.username.as_deref(), "username")? {
        existing.username = username;
    }
    if let Some(first_name) = required(update.first_name.as_deref(), "first_name")? {
        existing.first_name = first_name;
    }
    if let Some(last_name) = required(update.last_name.as_deref(), "last_name")? {
        existing.last_name = last_name;
    }
    if let Some(date_of_birth) = update.date_of_birth.as_deref() {
        existing.date_of_birth = Some(parse_date_of_birth(date_of_birth)?);
    }

    overwrite(&mut existing.bio, update.bio.as_ref());
    overwrite(&mut existing.avatar_url, update.avatar_url.as_ref());
    overwrite(&mut existing.address, update.address.as_ref());
    overwrite(&mut existing.contact_number, update.contact_number.as_ref());

    Ok(existing)
}

/// Apply a full (non-partial) update.
///
/// The mutable attributes are replaced wholesale: `first_name` and
/// `last_name` must be supplied, optional attributes missing from `update`
/// become unset, and a missing `username` keeps the current one.
///
/// # Errors
/// `InvalidInput` when a required field is missing or blank, or when
/// `date_of_birth` does not parse.
pub fn replace(existing: FullProfile, update: &ProfileUpdate) -> Result<FullProfile> {
    let first_name = required(update.first_name.as_deref(), "first_name")?
        .ok_or_else(|| missing("first_name"))?;
    let last_name = required(update.last_name.as_deref(), "last_name")?
        .ok_or_else(|| missing("last_name"))?;
    let username =
        required(update.username.as_deref(), "username")?.unwrap_or(existing.username);
    let date_of_birth = update.date_of_birth.as_deref().map(parse_date_of_birth).transpose()?;

    Ok(FullProfile {
        account_id: existing.account_id,
        username,
        first_name,
        last_name,
        bio: update.bio.clone(),
        avatar_url: update.avatar_url.clone(),
        date_of_birth,
        address: update.address.clone(),
        contact_number: update.contact_number.clone(),
        user_status: existing.user_status,
        version: existing.version,
    })
}

/// Parse a `date_of_birth` value into a UTC timestamp.
///
/// # Errors
/// `InvalidInput` naming the field and the expected format.
pub fn parse_date_of_birth(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| {
            UserServiceError::InvalidInput(format!(
                "date_of_birth {raw:?} is not a valid {DATE_TIME_FORMAT} date-time: {err}"
            ))
        })
}

fn overwrite(slot: &mut Option<String>, value: Option<&String>) {
    if let Some(value) = value {
        *slot = Some(value.clone());
    }
}

fn required(value: Option<&str>, field: &str) -> Result<Option<String>> {
    match value {
        Some(text) if text.trim().is_empty() => {
            Err(UserServiceError::InvalidInput(format!("{field} must not be empty")))
        }
        other => Ok(other.map(str::to_string)),
    }
}

fn missing(field: &str) -> UserServiceError {
    UserServiceError::InvalidInput(format!("{field} is required for a full update"))
}
