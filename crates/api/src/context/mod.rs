//! Application context - dependency injection container

use std::sync::Arc;

use tracing::{info, warn};
use usersvc_core::{
    ActivityFeed, ProfileAccessor, ProfileLifecycle, ProfileStore, ReferenceDataProvider,
    ReferenceDataStore,
};
use usersvc_domain::{Config, Result};
use usersvc_infra::{DbManager, SqliteProfileRepository, SqliteReferenceDataRepository};

use crate::utils::health::{ComponentHealth, HealthStatus};

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub db: Arc<DbManager>,
    pub profiles: Arc<ProfileAccessor>,
    pub lifecycle: Arc<ProfileLifecycle>,
    pub reference_data: Arc<ReferenceDataProvider>,
    pub activity: ActivityFeed,
}

impl AppContext {
    /// Open the database named by `config`, apply the schema and wire the
    /// services on top of the SQLite repositories.
    pub fn new(config: &Config) -> Result<Self> {
        let db = Arc::new(DbManager::new(&config.database.path, config.database.pool_size)?);
        db.run_migrations()?;

        let profile_store: Arc<dyn ProfileStore> =
            Arc::new(SqliteProfileRepository::new(Arc::clone(&db)));
        let reference_store: Arc<dyn ReferenceDataStore> =
            Arc::new(SqliteReferenceDataRepository::new(Arc::clone(&db)));

        info!(db_path = %config.database.path, "application context initialised");

        Ok(Self {
            profiles: Arc::new(ProfileAccessor::new(Arc::clone(&profile_store))),
            lifecycle: Arc::new(ProfileLifecycle::new(profile_store)),
            reference_data: Arc::new(ReferenceDataProvider::new(reference_store)),
            activity: ActivityFeed::new(),
            db,
        })
    }

    /// Aggregate health of the service's components.
    pub async fn health_check(&self) -> HealthStatus {
        let mut status = HealthStatus::new()
            .add_component(self.check_database_health().await)
            // Stateless services, healthy once constructed
            .add_component(ComponentHealth::healthy("profile_services"))
            .add_component(ComponentHealth::healthy("reference_data"))
            .add_component(ComponentHealth::healthy("activity_feed"));

        status.calculate_score();
        status
    }

    /// Check database health by running a trivial query off the async runtime.
    async fn check_database_health(&self) -> ComponentHealth {
        let db = Arc::clone(&self.db);

        match tokio::task::spawn_blocking(move || db.health_check()).await {
            Ok(Ok(())) => ComponentHealth::healthy("database"),
            Ok(Err(e)) => {
                warn!(error = %e, "database health check failed");
                ComponentHealth::unhealthy("database", format!("query failed: {e}"))
            }
            Err(e) => {
                warn!(error = %e, "database health check task panicked");
                ComponentHealth::unhealthy("database", format!("task panic: {e}"))
            }
        }
    }
}
