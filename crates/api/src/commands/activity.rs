//! User activity handler

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use usersvc_domain::UserActivities;

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::utils::logging::log_request_execution;

#[derive(Debug, Default, Deserialize)]
pub struct ActivityQuery {
    #[serde(default)]
    pub email: String,
}

/// `GET /v1/activities?email=`
pub async fn get_user_activities(
    State(ctx): State<Arc<AppContext>>,
    ApiQuery(query): ApiQuery<ActivityQuery>,
) -> Result<Json<UserActivities>, ApiError> {
    let start = Instant::now();

    let result = ctx.activity.get_user_activities(&query.email).await;

    log_request_execution("users::get_user_activities", start.elapsed(), result.as_ref().err());
    Ok(Json(result?))
}
