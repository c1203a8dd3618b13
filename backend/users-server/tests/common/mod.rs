#![allow(dead_code)]

//! Test infrastructure for users-server API tests

use users_db::Database;
use users_server::{AppState, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Create AppState backed by an isolated in-memory store
pub async fn create_test_app_state() -> AppState {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(db)
}

/// Send a bodiless request through a fresh router and return status and raw body
pub async fn send(state: &AppState, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let app = build_router(state.clone());

    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}

/// Same as [`send`] but parses the body as JSON
pub async fn send_json(state: &AppState, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(state, method, uri).await;
    let json = serde_json::from_slice(&body).expect("response body is not JSON");
    (status, json)
}

/// POST /user for `user{n}` / `user{n}@mail.ru`
pub async fn create_test_user(state: &AppState, n: usize) -> serde_json::Value {
    let (status, json) = send_json(
        state,
        "POST",
        &format!("/user?name=user{n}&email=user{n}%40mail.ru"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}
