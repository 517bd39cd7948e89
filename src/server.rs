//! HTTP server initialization and runtime setup.
//!
//! Opens the mapping store, wires the shortening engine, and runs the Axum
//! server until a shutdown signal arrives.

use crate::application::services::ShorteningService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Schema (create-if-absent)
/// - Shortening engine
/// - Axum HTTP server with graceful shutdown
///
/// The pool is closed after the server stops accepting requests.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or migrated
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = Arc::new(
        SqliteMappingRepository::connect(&config.store_settings())
            .await
            .context("Failed to open mapping store")?,
    );
    tracing::info!("Connected to database");

    let shortener = Arc::new(ShorteningService::with_max_attempts(
        repository.clone(),
        config.code_generator()?,
        config.code_max_attempts,
    ));

    let state = AppState::new(shortener, config.public_base_url.as_str());
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    repository.close().await;
    tracing::info!("Database connections closed");

    Ok(())
}

/// Completes on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received, draining connections");
}
