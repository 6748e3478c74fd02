#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use mini_ecommerce::config::PoolSettings;
use mini_ecommerce::store::connect_url;
use mini_ecommerce::{app, apply_migrations, AppState, Backend};
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

/// Fresh in-memory database with migrations applied. One connection keeps the database alive.
pub async fn test_state() -> AppState {
    let opts = PoolSettings {
        max_connections: 1,
        connect_attempts: 1,
        initial_backoff: Duration::from_millis(1),
    };
    let pool = connect_url("sqlite::memory:", &opts).await.expect("connect");
    apply_migrations(&pool, Backend::Sqlite).await.expect("migrate");
    AppState::new(pool, Backend::Sqlite)
}

pub async fn test_app() -> (Router, AppState) {
    let state = test_state().await;
    (app(state.clone(), BODY_LIMIT), state)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let req = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => req
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string())),
        None => req.body(Body::empty()),
    }
    .expect("request");
    dispatch(app, req).await
}

/// Send a raw body with an explicit (or no) content type.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        req = req.header(CONTENT_TYPE, ct);
    }
    let req = req.body(Body::from(body.to_string())).expect("request");
    dispatch(app, req).await
}

async fn dispatch(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.expect("response");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}
