//! HTTP server initialization and runtime setup.
//!
//! Handles snapshot loading, worker spawning, and Axum server lifecycle.

use crate::application::services::{LinkService, PersistenceService};
use crate::config::Config;
use crate::domain::LinkStore;
use crate::infrastructure::persistence::FileSnapshotRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Runs the HTTP server with the given configuration.
///
/// Initializes, in order:
/// - The in-memory link store
/// - The file-backed snapshot repository, loading the last snapshot (a
///   missing or corrupt snapshot file is logged, never fatal)
/// - The background snapshot worker
/// - The Axum HTTP server with graceful shutdown on SIGINT/SIGTERM
///
/// On shutdown the worker is signalled, flushes once more if the store is
/// dirty, and is joined before this function returns.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid or the bind fails
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(LinkStore::new());
    let repository = Arc::new(FileSnapshotRepository::new(config.save_file.clone()));

    let persistence = PersistenceService::new(store.clone(), repository);
    persistence.load().await;
    tracing::info!("Store ready with {} links", store.len());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let interval = Duration::from_secs(config.flush_interval_secs);
    let worker = tokio::spawn(persistence.run(interval, shutdown_rx));
    tracing::info!("Snapshot worker started");

    let state = AppState::new(Arc::new(LinkService::new(store)));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    let _ = shutdown_tx.send(true);
    worker.await?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
