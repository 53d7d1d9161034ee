//! Shared helpers for HTTP-level integration tests.
//!
//! Helpers are shared across several test binaries; not every binary uses
//! all of them.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fieldtrack_api::auth::password::hash_password;
use fieldtrack_api::config::ServerConfig;
use fieldtrack_api::router::build_app_router;
use fieldtrack_api::state::AppState;
use fieldtrack_db::models::line_item::{CreateLineItem, LineItem, LineItemKind};
use fieldtrack_db::models::project::{CreateProject, Project};
use fieldtrack_db::models::user::{CreateUser, User};
use fieldtrack_db::repositories::{LineItemRepo, ProjectRepo, UserRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// POST a JSON body without authentication.
pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST a JSON body with a session token in the Authorization header
/// (raw token, no scheme prefix).
pub async fn post_json_auth(
    app: &Router,
    path: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, token)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// POST with a token and no body.
pub async fn post_auth(app: &Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(AUTHORIZATION, token)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// GET with a token.
pub async fn get_auth(app: &Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .header(AUTHORIZATION, token)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// GET without a token.
pub async fn get(app: &Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a test user directly in the database and return the row plus
/// the plaintext password used.
pub async fn create_test_user(pool: &PgPool, username: &str) -> (User, String) {
    let password = "test_password_123!";
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        role: "engineer".to_string(),
        profile_name: format!("{username} profile"),
        password_hash: hash_password(password),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in via the API and return the session token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["sessionToken"]
        .as_str()
        .expect("login response must contain sessionToken")
        .to_string()
}

/// Create a test project with the given status.
pub async fn create_test_project(pool: &PgPool, job_number: &str, status: &str) -> Project {
    let input = CreateProject {
        job_number: job_number.to_string(),
        party_name: format!("{job_number} party"),
        sales_order: format!("SO-{job_number}"),
        status: status.to_string(),
        salesman: Some("Sam Field".to_string()),
        order_type: Some("Supply & Install".to_string()),
        assigned_to: None,
    };
    ProjectRepo::create(pool, &input)
        .await
        .expect("project creation should succeed")
}

/// Create a line item with nothing installed yet.
pub async fn create_test_line_item(
    pool: &PgPool,
    kind: LineItemKind,
    project_id: i64,
    stock_code: &str,
    quantity: f64,
) -> LineItem {
    let input = CreateLineItem {
        project_id,
        stock_code: stock_code.to_string(),
        description: format!("{stock_code} description"),
        unit: "m".to_string(),
        quantity,
    };
    LineItemRepo::create(pool, kind, &input)
        .await
        .expect("line item creation should succeed")
}
