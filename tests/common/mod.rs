#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_api::auth::AuthKeys;
use bookshelf_api::config::DatabaseConfig;
use bookshelf_api::{app, database, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const TEST_ISSUER: &str = "bookshelf-api";
pub const TEST_AUDIENCE: &str = "bookshelf-clients";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Build the full application against a fresh in-memory database
pub async fn test_app() -> Router {
    // Single connection so every query sees the same in-memory database
    let config = DatabaseConfig {
        max_connections: 1,
        connection_timeout: 5,
        enable_query_logging: false,
    };
    let pool = database::connect("sqlite::memory:", &config)
        .await
        .expect("in-memory database");

    let auth = AuthKeys::new(TEST_SECRET, TEST_ISSUER, TEST_AUDIENCE).expect("auth keys");

    app(AppState {
        pool,
        auth: Arc::new(auth),
    })
}

/// Fire one request at the router and decode the JSON response (if any)
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };

    (status, value)
}

/// Register a fresh user and return a usable bearer token
pub async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "email": email,
            "password": TEST_PASSWORD,
            "fullName": "Test Reader"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "register failed: {}", body);
    body["data"]["token"].as_str().expect("token").to_string()
}

/// Create an author and return its JSON representation
pub async fn create_author(app: &Router, token: &str, name: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/authors",
        Some(token),
        Some(json!({
            "name": name,
            "bio": "Test biography",
            "dateOfBirth": "1903-06-25"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "create author failed: {}", body);
    body["data"].clone()
}

/// Create a book under an author via the nested route
pub async fn create_book(app: &Router, token: &str, author_id: &str, title: &str) -> Value {
    let (status, body) = send(
        app,
        "POST",
        &format!("/api/authors/{}/books", author_id),
        Some(token),
        Some(json!({
            "title": title,
            "publishDate": "1949-06-08"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "create book failed: {}", body);
    body["data"].clone()
}
