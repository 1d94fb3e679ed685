#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;
use usersvc_domain::constants::DEFAULT_USER_STATUS;
use usersvc_domain::FullProfile;
use usersvc_infra::database::DbManager;
use uuid::Uuid;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new temporary database with the schema applied.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("usersvc-test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("schema should apply");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Execute a batch of SQL statements against the database.
    pub fn execute_batch(&self, sql: &str) {
        let conn = self
            .manager
            .get_connection()
            .expect("connection should be available for execute_batch");
        conn.execute_batch(sql).expect("SQL batch execution should succeed");
    }
}

impl Default for TestDatabase {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh account row with only the required columns filled in.
pub fn new_profile(username: &str) -> FullProfile {
    FullProfile {
        account_id: Uuid::now_v7().to_string(),
        username: username.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Lovelace".to_string(),
        bio: None,
        avatar_url: None,
        date_of_birth: None,
        address: None,
        contact_number: None,
        user_status: DEFAULT_USER_STATUS.to_string(),
        version: 1,
    }
}
