#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tokio::sync::Mutex;
use tower::ServiceExt;

use safepath_api::config::ServerConfig;
use safepath_api::router::build_app_router;
use safepath_api::state::AppState;
use safepath_core::geofence::ZoneConfig;
use safepath_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        zones_file: None,
        debounce_secs: None,
    }
}

/// Build application state around the given zones.
pub fn build_test_state(pool: PgPool, zones: &ZoneConfig) -> AppState {
    let evaluator = zones.build_evaluator().expect("test zones should be valid");
    AppState {
        pool,
        config: Arc::new(test_config()),
        evaluator: Arc::new(Mutex::new(evaluator)),
        event_bus: Arc::new(EventBus::default()),
    }
}

/// Build the full application router with the built-in danger zone.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(build_test_state(pool, &ZoneConfig::default()), &test_config())
}

/// Build the router around an existing state (to inspect the bus or evaluator).
pub fn build_test_app_with_state(state: AppState) -> Router {
    build_app_router(state, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
