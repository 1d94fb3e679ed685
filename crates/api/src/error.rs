//! Mapping from service errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use usersvc_domain::UserServiceError;

/// Error returned by every handler
#[derive(Debug)]
pub struct ApiError(pub UserServiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            UserServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            UserServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            UserServiceError::Conflict(_) => StatusCode::CONFLICT,
            UserServiceError::Database(_)
            | UserServiceError::Config(_)
            | UserServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserServiceError> for ApiError {
    fn from(value: UserServiceError) -> Self {
        Self(value)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self.0 {
            UserServiceError::NotFound(m)
            | UserServiceError::InvalidInput(m)
            | UserServiceError::Conflict(m)
            | UserServiceError::Database(m)
            | UserServiceError::Config(m)
            | UserServiceError::Internal(m) => m.as_str(),
        };
        let body = ErrorBody { error: self.0.label(), message };

        (self.status(), Json(body)).into_response()
    }
}
