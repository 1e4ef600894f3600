//! Levels · Data-Wrangling Tutorial Backend
//!
//! - Axum HTTP API (levels, challenge text, answer grading)
//! - Optional Postgres level registry (via DATABASE_URL)
//! - Static demo client fallback (./static/index.html)
//!
//! Important env variables:
//!   PORT             : u16 (default 8000)
//!   DATABASE_URL     : enables the level registry if present
//!   DB_TIMEOUT_SECS  : bound on every database call (default 5)
//!   CATALOG_PATH     : TOML file replacing the built-in levels
//!   STATIC_DIR       : demo client directory (default ./static)
//!   LOG_LEVEL        : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT       : "pretty" (default) or "json"

use std::{net::SocketAddr, sync::Arc};

use levels_backend::{build_router, config::ServiceConfig, telemetry, AppState};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = ServiceConfig::from_env();
    telemetry::init_tracing(&cfg);
    let state = Arc::new(AppState::from_config(&cfg)?);
    let app = build_router(state, &cfg.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    let listener = TcpListener::bind(addr).await?;
    info!(target: "levels_backend", %addr, has_database_url = cfg.has_database_url(), "HTTP server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(target: "levels_backend", "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(target: "levels_backend", error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(target: "levels_backend", error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(target: "levels_backend", "Shutdown signal received");
}
