//! Reference data handlers

use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use usersvc_domain::{Category, Topic};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::utils::logging::log_request_execution;

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// `GET /v1/topics`
pub async fn get_all_topics(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<TopicsResponse>, ApiError> {
    let start = Instant::now();

    let result = ctx.reference_data.list_topics().await;

    log_request_execution("reference::get_all_topics", start.elapsed(), result.as_ref().err());
    Ok(Json(TopicsResponse { topics: result? }))
}

/// `GET /v1/categories`
pub async fn get_all_categories(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let start = Instant::now();

    let result = ctx.reference_data.list_categories().await;

    log_request_execution(
        "reference::get_all_categories",
        start.elapsed(),
        result.as_ref().err(),
    );
    Ok(Json(CategoriesResponse { categories: result? }))
}
