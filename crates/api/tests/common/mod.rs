#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use maya_api::auth::jwt::JwtConfig;
use maya_api::config::{BootstrapAdmin, ServerConfig};
use maya_api::router::build_app_router;
use maya_api::seed::seed_defaults;
use maya_api::state::AppState;
use maya_storage::{InMemoryMediaStore, S3StoreConfig};

pub const PUBLIC_BASE_URL: &str = "https://cdn.test/media";
pub const TEST_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 24,
        },
        bootstrap_admin: BootstrapAdmin::default(),
        storage: S3StoreConfig {
            bucket: "media".to_string(),
            region: "us-east-1".to_string(),
            endpoint: None,
            public_base_url: PUBLIC_BASE_URL.to_string(),
        },
    }
}

/// Build the full application router backed by a fresh in-memory store.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_store(pool, Arc::new(InMemoryMediaStore::new(PUBLIC_BASE_URL)))
}

/// Build the full application router around the given store, so tests can
/// inspect what was uploaded.
pub fn build_test_app_with_store(pool: PgPool, store: Arc<InMemoryMediaStore>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: store,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router should not fail")
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request should build")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::POST, uri, None)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::PUT, uri, None, body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value, token: &str) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

pub async fn send_raw(app: Router, request: Request<Body>) -> Response {
    send(app, request).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Multipart
// ---------------------------------------------------------------------------

pub const BOUNDARY: &str = "maya-test-boundary";

/// One part of a multipart form.
pub enum Part<'a> {
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

/// Encode `parts` as a `multipart/form-data` body using [`BOUNDARY`].
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST a multipart body to `/api/upload`.
pub async fn upload(app: Router, body: Vec<u8>, token: Option<&str>) -> Response {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/upload")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    send(app, builder.body(Body::from(body)).expect("request should build")).await
}

// ---------------------------------------------------------------------------
// Auth helpers
// ---------------------------------------------------------------------------

/// Create the default admin through `/api/admin/init` and return a token.
pub async fn init_and_login(pool: &PgPool) -> String {
    let response = post_empty(build_test_app(pool.clone()), "/api/admin/init").await;
    assert_eq!(response.status(), StatusCode::OK);
    login(pool, "vishwa", "mayaagency").await
}

/// Log in via the API and return the token.
pub async fn login(pool: &PgPool, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(build_test_app(pool.clone()), "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must carry a token")
        .to_string()
}

/// Seed the default content and return an admin token.
pub async fn seeded_token(pool: &PgPool) -> String {
    seed_defaults(pool, &BootstrapAdmin::default())
        .await
        .expect("seeding should succeed");
    login(pool, "vishwa", "mayaagency").await
}
