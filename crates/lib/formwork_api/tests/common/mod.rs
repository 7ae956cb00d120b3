//! Shared integration-test harness — ephemeral PG, migrated schema, router,
//! and request helpers.

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode, header};
use formwork_api::{AppState, config::ApiConfig};
use formwork_core::db::DbManager;
use tower::ServiceExt;

/// Deterministic signing secret for tests.
pub const TEST_SECRET: &str = "test-secret";

pub struct TestApp {
    pub db: DbManager,
    pub pool: sqlx::PgPool,
    pub app: Router,
}

/// Spin up an ephemeral PostgreSQL instance, run migrations, build the router.
pub async fn spawn_app() -> TestApp {
    let mut db = DbManager::ephemeral().await.expect("DbManager::ephemeral");
    db.setup().await.expect("db setup");
    db.start().await.expect("db start");

    let pool = sqlx::PgPool::connect(&db.connection_url())
        .await
        .expect("connect to ephemeral PG");

    formwork_api::migrate(&pool).await.expect("migrations");

    let state = AppState {
        pool: pool.clone(),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: db.connection_url(),
            jwt_secret: TEST_SECRET.into(),
        },
    };

    let app = formwork_api::router(state);

    TestApp { db, pool, app }
}

impl TestApp {
    /// Send a request, returning the status and raw body bytes.
    pub async fn request_raw(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, Bytes) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .expect("build request"),
            None => builder.body(Body::empty()).expect("build request"),
        };

        let response = self.app.clone().oneshot(request).await.expect("request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, bytes)
    }

    /// Send a request, returning the status and parsed JSON body
    /// (`Null` for empty bodies).
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.request_raw(method, uri, token, body).await;
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse JSON body")
        };
        (status, json)
    }

    /// Register a user, returning (token, user_id).
    pub async fn register(&self, email: &str, password: &str) -> (String, String) {
        let (status, body) = self
            .request(
                "POST",
                "/auth/register",
                None,
                Some(serde_json::json!({"email": email, "password": password})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        (
            body["token"].as_str().expect("token").to_string(),
            body["userId"].as_str().expect("userId").to_string(),
        )
    }

    /// Log in, returning (token, user_id).
    pub async fn login(&self, email: &str, password: &str) -> (String, String) {
        let (status, body) = self
            .request(
                "POST",
                "/auth/login",
                None,
                Some(serde_json::json!({"email": email, "password": password})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        (
            body["token"].as_str().expect("token").to_string(),
            body["userId"].as_str().expect("userId").to_string(),
        )
    }

    /// Stop the ephemeral database.
    pub async fn teardown(mut self) {
        self.db.stop().await.expect("db stop");
    }
}
