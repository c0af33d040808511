//! HTTP server initialization and runtime setup.
//!
//! Loads the user snapshot, wires application state, and drives the Axum
//! server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::loader::load_users;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// The users file is loaded and validated before the listener is bound, so a
/// bad data set stops the process without ever serving a request.
///
/// # Errors
///
/// Returns an error if:
/// - The users file cannot be read or fails validation
/// - The listen address is invalid or cannot be bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let users = load_users(&config.users_file)
        .await
        .with_context(|| format!("Failed to load users from {}", config.users_file))?;

    let state = AppState::new(users);
    let total = state.user_service.total_users().await?;
    tracing::info!("Serving {total} users");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
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

    tracing::info!("Shutdown signal received");
}
