//! Reference data provider
//!
//! Absence of reference rows is not something a caller can act on, so it is
//! logged in detail here and surfaced as the same generic failure as any
//! other storage problem.

use std::sync::Arc;

use tracing::{error, info};
use usersvc_domain::{Category, Result, Topic, UserServiceError};

use super::ports::ReferenceDataStore;

const TOPICS_ERROR: &str = "error while querying the topics";
const CATEGORIES_ERROR: &str = "error while querying the categories";

/// Serves topics and categories from the reference store
pub struct ReferenceDataProvider {
    store: Arc<dyn ReferenceDataStore>,
}

impl ReferenceDataProvider {
    pub fn new(store: Arc<dyn ReferenceDataStore>) -> Self {
        Self { store }
    }

    pub async fn list_topics(&self) -> Result<Vec<Topic>> {
        info!("getting all the topics");

        self.store.list_topics().await.map_err(|err| {
            if err.is_not_found() {
                error!(error = %err, "cannot find the topics in the database");
            } else {
                error!(error = %err, "{TOPICS_ERROR}");
            }
            UserServiceError::Internal(TOPICS_ERROR.to_string())
        })
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        info!("getting all the descriptions and categories");

        self.store.list_categories().await.map_err(|err| {
            if err.is_not_found() {
                error!(error = %err, "no categories and descriptions found in the database");
            } else {
                error!(error = %err, "{CATEGORIES_ERROR}");
            }
            UserServiceError::Internal(CATEGORIES_ERROR.to_string())
        })
    }
}
