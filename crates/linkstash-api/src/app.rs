//! Application builder — wires router + middleware + state into an Axum app.

use axum::Router;
use tracing::info;

use linkstash_core::config::AppConfig;
use linkstash_core::error::AppError;
use linkstash_core::result::AppResult;
use linkstash_database::StoreManager;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the Linkstash server with the given configuration.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    info!("Starting Linkstash server...");

    let stores = StoreManager::new(&config.database).await?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, stores);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Linkstash server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

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

    info!("Shutdown signal received");
}
