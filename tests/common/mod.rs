//! Shared helpers for the HTTP contract tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use starblog::db::{Database, SeedDocument};
use starblog::http_server::app;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub type TestApp = NormalizePath<Router>;

const CATALOG: &str = r#"{
    "people": [
        {"id": 1, "name": "Luke Skywalker", "birth_year": "19BBY", "height": 172},
        {"id": 2, "name": "Leia Organa", "gender": "female"},
        {"id": 3, "name": "Han Solo"}
    ],
    "planets": [
        {"id": 1, "name": "Tatooine", "climate": "arid", "population": 200000},
        {"id": 2, "name": "Alderaan"}
    ]
}"#;

/// In-memory store with the default user, three people and two planets.
pub async fn seeded_db() -> Database {
    let db = Database::in_memory().await.expect("open in-memory database");

    // Inserted directly so the tests skip password hashing
    sqlx::query(
        "INSERT INTO users (id, username, email, password) VALUES \
         (1, 'skywalker', 'luke@rebellion.org', 'x'), \
         (2, 'organa', 'leia@alderaan.gov', 'y')",
    )
    .execute(db.pool())
    .await
    .expect("insert users");

    SeedDocument::from_json(CATALOG)
        .expect("parse catalog")
        .apply(&db)
        .await
        .expect("apply catalog");

    db
}

pub async fn test_app() -> TestApp {
    app(seeded_db().await)
}

/// Send a body-less request and decode the JSON response.
pub async fn send(app: &TestApp, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request");

    let response = app.clone().oneshot(request).await.expect("route request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read response body");

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response is JSON")
    };
    (status, body)
}

pub async fn get(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri).await
}

/// Sorted field names of a JSON object
pub fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("JSON object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}
