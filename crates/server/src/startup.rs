use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the router around an already connected pool.
pub fn build_app(db: DatabaseConnection, server: &ServerConfig) -> Router {
    routes::build_router(ServerState::new(db), build_cors(), server.request_timeout())
}

/// Resolves on Ctrl+C; a failing signal handler is logged and treated as a stop request.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
    }
    info!(service = "server", event = "shutdown_signal", "shutting down gracefully");
}

/// Serve `app` on `listener` until `shutdown` resolves, letting in-flight
/// requests finish.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Connect, create tables if needed and run the HTTP server until Ctrl+C.
/// `cfg` is expected to be normalized and validated already.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::schema::ensure_schema(&db).await?;

    let app = build_app(db, &cfg.server);

    let addr: SocketAddr = cfg.server.bind_addr().parse()?;
    info!(%addr, timeout_secs = cfg.server.request_timeout_secs, "starting biztime server");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, shutdown_signal()).await?;
    info!(service = "server", event = "stop", "server stopped");
    Ok(())
}
