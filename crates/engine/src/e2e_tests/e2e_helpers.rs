//! Shared harness for E2E tests.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api;
use crate::app::App;
use crate::infrastructure::{
    clock::SystemClock,
    config::SigningKey,
    password::Argon2PasswordHasher,
    sqlite::{temp_database, SqliteRepositories},
    token::JwtTokenIssuer,
};

pub const TEST_SIGNING_KEY: &str = "e2e-signing-key-that-is-long-enough!";

/// A running router over a fresh database.
pub struct E2EServer {
    router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

/// Status, headers and JSON body of one response. Body is `Null` when empty
/// or not JSON.
pub struct E2EResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn signing_key() -> SigningKey {
    SigningKey::new(TEST_SIGNING_KEY).unwrap()
}

impl E2EServer {
    pub async fn start() -> Self {
        let (dir, pool) = temp_database(4).await;
        let tokens = JwtTokenIssuer::new(&signing_key(), Arc::new(SystemClock::new()));
        let app = App::new(
            SqliteRepositories::new(pool.clone()),
            Arc::new(Argon2PasswordHasher::fast()),
            Arc::new(tokens),
        );

        Self {
            router: api::http::routes().with_state(Arc::new(app)),
            pool,
            _dir: dir,
        }
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> E2EResponse {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        E2EResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> E2EResponse {
        self.send(
            Method::POST,
            "/api/auth/register",
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> E2EResponse {
        self.send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(serde_json::json!({ "username": username, "password": password })),
        )
        .await
    }

    /// Register `username` with a valid password and return a bearer token.
    pub async fn signed_in(&self, username: &str) -> String {
        let registered = self.register(username, "GoodPass1!").await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.body);
        let login = self.login(username, "GoodPass1!").await;
        assert_eq!(login.status, StatusCode::OK, "{}", login.body);
        login.body["token"].as_str().unwrap().to_string()
    }

    pub async fn create_world(
        &self,
        token: &str,
        name: &str,
        width: i64,
        height: i64,
    ) -> E2EResponse {
        self.send(
            Method::POST,
            "/api/worlds",
            Some(token),
            Some(serde_json::json!({ "name": name, "width": width, "height": height })),
        )
        .await
    }

    pub async fn add_object(&self, token: &str, world_id: i64, x: f64, y: f64) -> E2EResponse {
        self.send(
            Method::POST,
            &format!("/api/worlds/{world_id}/objects"),
            Some(token),
            Some(serde_json::json!({ "type": "tree", "x": x, "y": y })),
        )
        .await
    }

    pub async fn count_rows(&self, sql: &str) -> i64 {
        sqlx::query_scalar(sql).fetch_one(&self.pool).await.unwrap()
    }
}
