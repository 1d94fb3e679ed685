#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use usersvc_api::{build_router, AppContext};
use usersvc_domain::constants::DEFAULT_USER_STATUS;
use usersvc_domain::{Config, DatabaseConfig, FullProfile};
use usersvc_infra::SqliteProfileRepository;
use uuid::Uuid;

/// Application context over a throwaway database.
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    pub profiles: SqliteProfileRepository,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary test directory");
        let db_path = temp_dir.path().join("usersvc.db");

        let config = Config {
            database: DatabaseConfig {
                path: db_path.to_string_lossy().to_string(),
                pool_size: 4,
            },
            ..Config::default()
        };

        let ctx = Arc::new(AppContext::new(&config).expect("failed to create test context"));
        let profiles = SqliteProfileRepository::new(Arc::clone(&ctx.db));

        Self { ctx, profiles, _temp_dir: temp_dir }
    }

    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.ctx))
    }

    /// Seed an account row directly through the repository.
    pub async fn seed(&self, profile: FullProfile) {
        self.profiles.insert_profile(profile).await.expect("seed profile");
    }

    /// Send one request through the router and decode the JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body readable");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body is JSON")
        };
        (status, body)
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("valid request")
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).expect("valid request")
}

pub fn put_json(uri: &str, body: &Value) -> Request<Body> {
    Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub fn profile(username: &str) -> FullProfile {
    FullProfile {
        account_id: Uuid::now_v7().to_string(),
        username: username.to_string(),
        first_name: "Ana".to_string(),
        last_name: "Lima".to_string(),
        bio: Some("old".to_string()),
        avatar_url: Some("https://cdn.example.com/ana.png".to_string()),
        date_of_birth: None,
        address: Some("1 Main St".to_string()),
        contact_number: Some("555".to_string()),
        user_status: DEFAULT_USER_STATUS.to_string(),
        version: 1,
    }
}
