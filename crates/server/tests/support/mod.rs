#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes::{build_router, ServerState};

pub fn app(db: DatabaseConnection) -> Router {
    app_with_timeout(db, Duration::from_secs(5))
}

pub fn app_with_timeout(db: DatabaseConnection, request_timeout: Duration) -> Router {
    build_router(ServerState::new(db), CorsLayer::very_permissive(), request_timeout)
}

/// Drive one request through the router and decode the JSON reply.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}

pub fn error_body(message: &str, status: u16) -> Value {
    serde_json::json!({"error": {"message": message, "status": status}})
}
