//! Route table

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::commands;
use crate::context::AppContext;

/// Build the service router over a shared [`AppContext`].
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route(
            "/v1/users/{username}",
            get(commands::get_user_profile)
                .put(commands::update_user_profile)
                .delete(commands::delete_user_profile),
        )
        .route("/v1/activities", get(commands::get_user_activities))
        .route("/v1/topics", get(commands::get_all_topics))
        .route("/v1/categories", get(commands::get_all_categories))
        .route("/health", get(commands::get_health))
        .with_state(ctx)
}
