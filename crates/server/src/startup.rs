use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, DatabaseConfig, StoreKind};
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Repositories for the configured store. SQL stores are migrated first when
/// `auto_migrate` is set.
pub async fn build_state(cfg: &DatabaseConfig) -> anyhow::Result<AppState> {
    match cfg.store_kind() {
        Some(StoreKind::Memory) => {
            info!(store = "memory", "using in-memory repositories");
            Ok(AppState::in_memory())
        }
        Some(_) => {
            let db = models::db::connect_with_config(cfg).await?;
            if cfg.auto_migrate {
                migration::Migrator::up(&db, None).await?;
                info!(event = "migrated", "database schema up to date");
            }
            Ok(AppState::with_database(db))
        }
        None => Err(StartupError::InvalidConfig(format!("unsupported database url: {}", cfg.url)).into()),
    }
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Build the app for an already loaded and validated config and serve it
/// until Ctrl+C. Logging is expected to be initialized by the caller.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg.database).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bad bind address {}: {e}", cfg.server.bind_addr())))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "starting server");
    serve(listener, app, shutdown_signal()).await?;
    info!(event = "stopped", "server stopped");
    Ok(())
}
