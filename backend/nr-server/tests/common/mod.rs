#![allow(dead_code)]

//! Test infrastructure for nr-server API tests

use nr_auth::{CredentialHasher, HasherParams};
use nr_core::IdentityStore;
use nr_db::NurseRepository;
use nr_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_COOKIE_NAME: &str = "NURSE_SESSION";

/// Cheapest Argon2 cost the hasher accepts
pub fn create_test_hasher() -> CredentialHasher {
    CredentialHasher::new(HasherParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    })
    .expect("Failed to build test hasher")
}

/// AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = nr_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let store: Arc<dyn IdentityStore> = Arc::new(NurseRepository::new(pool));

    AppState::new(store, create_test_hasher(), TEST_COOKIE_NAME)
}

pub fn nurse_body(first_name: &str, email: &str, password: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Lopez",
        "email": email,
        "password": password,
    })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Send one request through a fresh router over `state`
pub async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let app = build_router(state.clone());

    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Register a nurse through the API and return its id
pub async fn register(state: &AppState, first_name: &str, email: &str) -> i64 {
    let response = send(
        state,
        "POST",
        "/nurse/register",
        Some(nurse_body(first_name, email, "ValidPass123!")),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.json);

    response.json["nurse"]["nurse_id"].as_i64().unwrap()
}
