use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig, StorageBackend};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::{CarService, MemoryCarRepository, SeaOrmCarRepository};

use crate::errors::StartupError;
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host names are resolved, so `localhost` binds like `127.0.0.1`.
async fn bind_listener(server: &ServerConfig) -> Result<TcpListener, StartupError> {
    TcpListener::bind((server.host.as_str(), server.port))
        .await
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Bind the configured address and serve until `shutdown` resolves.
pub async fn run_with_config<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind_listener(&cfg.server).await?;
    serve(cfg, listener, shutdown).await
}

/// Wire the configured backend into the router and serve on an already bound listener.
///
/// The database pool is opened (and pinged) before the first request is accepted and
/// closed after the server has drained.
pub async fn serve<F>(cfg: AppConfig, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    match cfg.storage.backend {
        StorageBackend::Memory => {
            let svc = CarService::new(Arc::new(MemoryCarRepository::new()));
            info!(%addr, backend = "memory", "starting car server");
            serve_router(listener, routes::build_router(svc, build_cors()), shutdown).await?;
        }
        StorageBackend::Database => {
            let db = models::db::connect_with_config(&cfg.database)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            if cfg.database.auto_migrate {
                models::db::migrate(&db).await.map_err(|e| StartupError::Database(e.to_string()))?;
                info!("schema migrations applied");
            }
            let svc = CarService::new(Arc::new(SeaOrmCarRepository::new(db.clone())));
            info!(%addr, backend = "database", "starting car server");
            let served = serve_router(listener, routes::build_router(svc, build_cors()), shutdown).await;
            if let Err(e) = db.close().await {
                warn!(error = %e, "closing database pool failed");
            }
            served?;
        }
    }
    info!("car server stopped");
    Ok(())
}

async fn serve_router<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}
