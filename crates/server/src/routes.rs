pub mod companies;
pub mod invoices;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{StatusCode, Uri},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use common::types::Health;
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, warn, Level};
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

/// Shared handler state: the connection pool, and nothing else.
#[derive(Clone)]
pub struct ServerState {
    pub db: Arc<DatabaseConnection>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn not_found(uri: Uri) -> ApiError {
    debug!(%uri, "no route");
    ApiError::NotFound("Not Found".into())
}

/// `TimeoutLayer` answers with a bare 408; give it the usual error body.
/// Handlers never produce 408 themselves.
async fn timeout_envelope(resp: Response) -> Response {
    if resp.status() == StatusCode::REQUEST_TIMEOUT {
        warn!("request timed out");
        return ApiError::Timeout.into_response();
    }
    resp
}

/// Build the full application router: company and invoice resources,
/// health and API document, with tracing, CORS and a per-request timeout.
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let companies = Router::new()
        .route("/companies", get(companies::list).post(companies::create))
        .route(
            "/companies/:code",
            get(companies::get).put(companies::update).delete(companies::delete),
        );

    let invoices = Router::new()
        .route("/invoices", get(invoices::list).post(invoices::create))
        .route(
            "/invoices/:id",
            get(invoices::get).put(invoices::update).delete(invoices::delete),
        );

    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(companies)
        .merge(invoices)
        .fallback(not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::map_response(timeout_envelope))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时记录状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
