//! Shared helpers for integration tests.
//!
//! Each test gets a fresh migrated database from `#[sqlx::test]` and
//! builds the real application router, so requests exercise the same
//! middleware stack as production.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::auth::{jwt, password};
use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;

/// Build a config suitable for tests: no env vars, media in a temp dir.
pub fn test_config() -> ServerConfig {
    let media_root = std::env::temp_dir().join(format!("folio-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&media_root).expect("create test media dir");

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root,
        keepalive_interval_secs: 0,
        jwt: jwt::JwtConfig {
            secret: "integration-test-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router against the given pool.
pub fn build_test_app(pool: sqlx::PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

/// Like [`build_test_app`], but with a caller-supplied config (e.g. to
/// know where uploaded media lands).
pub fn build_test_app_with(pool: sqlx::PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Seed an admin user and return a valid bearer token for it.
pub async fn admin_token(pool: &sqlx::PgPool) -> String {
    let hash = password::hash_password("test-password-123").expect("hash password");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: "admin@example.com".to_string(),
            password_hash: hash,
            display_name: "Test Admin".to_string(),
            role: "admin".to_string(),
        },
    )
    .await
    .expect("create admin user");

    jwt::generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("generate access token")
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> Response {
    send(app, "GET", uri, token, None).await
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, "POST", uri, token, Some(body)).await
}

pub async fn put_json(
    app: &Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response {
    send(app, "PUT", uri, token, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str, token: Option<&str>) -> Response {
    send(app, "DELETE", uri, token, None).await
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");

    app.clone().oneshot(request).await.expect("send request")
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("parse body as JSON")
}

/// Assert a status and decode the body in one step.
pub async fn expect_json(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status, "unexpected response status");
    body_json(response).await
}
