//! User profile handlers
//!
//! Thin adapters from HTTP requests to [`ProfileAccessor`] and
//! [`ProfileLifecycle`]. Each handler logs one structured execution line.
//!
//! [`ProfileAccessor`]: usersvc_core::ProfileAccessor
//! [`ProfileLifecycle`]: usersvc_core::ProfileLifecycle

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use usersvc_domain::{DeleteConfirmation, ProfileUpdate, ProfileView, UpdateSummary};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::utils::logging::log_request_execution;

#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub is_private: bool,
}

/// Body of `PUT /v1/users/{username}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    /// Merge into the stored record instead of replacing it.
    #[serde(default)]
    pub partial: bool,
    #[serde(flatten)]
    pub fields: ProfileUpdate,
}

/// `GET /v1/users/{username}?is_private=bool`
pub async fn get_user_profile(
    State(ctx): State<Arc<AppContext>>,
    Path(username): Path<String>,
    ApiQuery(query): ApiQuery<ProfileQuery>,
) -> Result<Json<ProfileView>, ApiError> {
    let start = Instant::now();

    let result = ctx.profiles.get_profile(&username, query.is_private).await;

    log_request_execution("users::get_user_profile", start.elapsed(), result.as_ref().err());
    Ok(Json(result?))
}

/// `PUT /v1/users/{username}`
pub async fn update_user_profile(
    State(ctx): State<Arc<AppContext>>,
    Path(username): Path<String>,
    ApiJson(request): ApiJson<UpdateProfileRequest>,
) -> Result<Json<UpdateSummary>, ApiError> {
    let start = Instant::now();

    let result = ctx.lifecycle.update(&username, request.fields, request.partial).await;

    log_request_execution("users::update_user_profile", start.elapsed(), result.as_ref().err());
    Ok(Json(result?))
}

/// `DELETE /v1/users/{username}`
pub async fn delete_user_profile(
    State(ctx): State<Arc<AppContext>>,
    Path(username): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    let start = Instant::now();

    let result = ctx.lifecycle.delete(&username).await;

    log_request_execution("users::delete_user_profile", start.elapsed(), result.as_ref().err());
    Ok(Json(result?))
}
