#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use notebox_api::config::ServerConfig;
use notebox_api::router::build_app_router;
pub use notebox_api::router::App;
use notebox_api::state::AppState;
use notebox_db::DbPool;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// A file-backed pool in a fresh temporary directory, schema applied.
///
/// The `TempDir` must outlive the pool.
pub async fn test_pool() -> (TempDir, DbPool) {
    let dir = tempfile::tempdir().unwrap();
    let pool = notebox_db::create_pool(dir.path().join("notes.db"), 1);
    notebox_db::ensure_schema(&pool).await.unwrap();
    (dir, pool)
}

/// Build the full application, with the production middleware stack, over
/// the given pool.
pub fn build_test_app(pool: DbPool) -> App {
    build_app_router(AppState { pool }, &test_config())
}

/// Application over a fresh database. Keep the returned `TempDir` alive for
/// the whole test.
pub async fn test_app() -> (TempDir, App) {
    let (dir, pool) = test_pool().await;
    (dir, build_test_app(pool))
}

async fn send(app: &App, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &App, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &App, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &App, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: &App, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw string body with a JSON content type.
pub async fn send_json(app: &App, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}
