//! User profile repository implementation using SQLite
//!
//! Rows live in `user_account`, keyed by the unique `username` column.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use tokio::task;
use tracing::debug;
use usersvc_core::ProfileStore;
use usersvc_domain::{FullProfile, PublicProfile, Result as DomainResult, UserServiceError};

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

const FULL_PROFILE_COLUMNS: &str = "account_id, username, first_name, last_name, bio, avatar_url,
     date_of_birth, address, contact_number, user_status, version";

/// SQLite-backed implementation of [`ProfileStore`]
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Insert a brand new account row.
    ///
    /// Accounts are provisioned outside the profile contract; this exists for
    /// seeding and tests. The stored version starts at `profile.version`.
    pub async fn insert_profile(&self, profile: FullProfile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            insert_full_profile(&conn, &profile).map_err(map_sql_error)?;
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileRepository {
    async fn username_exists(&self, username: &str) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            username_exists(&conn, &username).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_public_profile(&self, username: &str) -> DomainResult<Option<PublicProfile>> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<PublicProfile>> {
            let conn = db.get_connection()?;

            conn.query_row(
                "SELECT username, first_name, last_name, bio, avatar_url
                 FROM user_account WHERE username = ?1",
                params![&username],
                map_public_profile_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn get_full_profile(&self, username: &str) -> DomainResult<Option<FullProfile>> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<FullProfile>> {
            let conn = db.get_connection()?;

            conn.query_row(
                &format!("SELECT {FULL_PROFILE_COLUMNS} FROM user_account WHERE username = ?1"),
                params![&username],
                map_full_profile_row,
            )
            .optional()
            .map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn update_profile(&self, username: &str, profile: FullProfile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let changed = update_full_profile(&conn, &username, &profile).map_err(map_sql_error)?;

            if changed == 0 {
                // Either the row vanished or another writer bumped the version.
                return if username_exists(&conn, &username).map_err(map_sql_error)? {
                    Err(UserServiceError::Conflict(format!(
                        "profile {username} was modified concurrently (expected version {})",
                        profile.version
                    )))
                } else {
                    Err(UserServiceError::user_not_found(&username))
                };
            }

            debug!(username = %username, new_username = %profile.username, "profile row updated");
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete_profile(&self, username: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let username = username.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            let deleted = conn
                .execute("DELETE FROM user_account WHERE username = ?1", params![&username])
                .map_err(map_sql_error)?;

            if deleted == 0 {
                return Err(UserServiceError::user_not_found(&username));
            }
            Ok(())
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn username_exists(conn: &Connection, username: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM user_account WHERE username = ?1)",
        params![username],
        |row| row.get::<_, bool>(0),
    )
}

fn map_public_profile_row(row: &Row<'_>) -> rusqlite::Result<PublicProfile> {
    Ok(PublicProfile {
        username: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        bio: row.get(3)?,
        avatar_url: row.get(4)?,
    })
}

fn map_full_profile_row(row: &Row<'_>) -> rusqlite::Result<FullProfile> {
    let date_of_birth: Option<String> = row.get(6)?;

    Ok(FullProfile {
        account_id: row.get(0)?,
        username: row.get(1)?,
        first_name: row.get(2)?,
        last_name: row.get(3)?,
        bio: row.get(4)?,
        avatar_url: row.get(5)?,
        date_of_birth: date_of_birth.as_deref().map(|raw| decode_timestamp(6, raw)).transpose()?,
        address: row.get(7)?,
        contact_number: row.get(8)?,
        user_status: row.get(9)?,
        version: row.get(10)?,
    })
}

fn insert_full_profile(conn: &Connection, profile: &FullProfile) -> rusqlite::Result<usize> {
    let date_of_birth = profile.date_of_birth.map(encode_timestamp);
    let params: [&dyn ToSql; 11] = [
        &profile.account_id,
        &profile.username,
        &profile.first_name,
        &profile.last_name,
        &profile.bio,
        &profile.avatar_url,
        &date_of_birth,
        &profile.address,
        &profile.contact_number,
        &profile.user_status,
        &profile.version,
    ];

    conn.execute(
        &format!(
            "INSERT INTO user_account ({FULL_PROFILE_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
        ),
        params.as_slice(),
    )
}

/// Compare-and-swap write keyed by the current username and the version read
/// during fetch. Returns the number of rows changed.
fn update_full_profile(
    conn: &Connection,
    username: &str,
    profile: &FullProfile,
) -> rusqlite::Result<usize> {
    let date_of_birth = profile.date_of_birth.map(encode_timestamp);
    let params: [&dyn ToSql; 11] = [
        &profile.username,
        &profile.first_name,
        &profile.last_name,
        &profile.bio,
        &profile.avatar_url,
        &date_of_birth,
        &profile.address,
        &profile.contact_number,
        &profile.user_status,
        &username, // WHERE clause
        &profile.version,
    ];

    conn.execute(
        "UPDATE user_account SET
            username = ?1, first_name = ?2, last_name = ?3, bio = ?4, avatar_url = ?5,
            date_of_birth = ?6, address = ?7, contact_number = ?8, user_status = ?9,
            version = version + 1,
            updated_at = CAST(strftime('%s','now') AS INTEGER)
         WHERE username = ?10 AND version = ?11",
        params.as_slice(),
    )
}

fn encode_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn decode_timestamp(column: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err)))
}

fn map_join_error(err: task::JoinError) -> UserServiceError {
    InfraError::from(err).into()
}
