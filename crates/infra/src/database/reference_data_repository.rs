//! Reference data repository (topics and categories)

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::Connection;
use tokio::task;
use usersvc_core::ReferenceDataStore;
use usersvc_domain::{Category, Result as DomainResult, Topic, UserServiceError};

use super::manager::{map_sql_error, DbManager};
use crate::errors::InfraError;

/// SQLite-backed implementation of [`ReferenceDataStore`]
pub struct SqliteReferenceDataRepository {
    db: Arc<DbManager>,
}

impl SqliteReferenceDataRepository {
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReferenceDataStore for SqliteReferenceDataRepository {
    async fn list_topics(&self) -> DomainResult<Vec<Topic>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Topic>> {
            let conn = db.get_connection()?;
            query_topics(&conn).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Vec<Category>> {
            let conn = db.get_connection()?;
            query_categories(&conn).map_err(map_sql_error)
        })
        .await
        .map_err(map_join_error)?
    }
}

fn query_topics(conn: &Connection) -> rusqlite::Result<Vec<Topic>> {
    let mut stmt = conn.prepare("SELECT description, category FROM topics ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Topic { description: row.get(0)?, category: row.get(1)? })
    })?;
    rows.collect()
}

fn query_categories(conn: &Connection) -> rusqlite::Result<Vec<Category>> {
    let mut stmt = conn.prepare("SELECT category, description FROM categories ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Category { category: row.get(0)?, description: row.get(1)? })
    })?;
    rows.collect()
}

fn map_join_error(err: task::JoinError) -> UserServiceError {
    InfraError::from(err).into()
}
