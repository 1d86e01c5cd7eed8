//! Application builder: wires router, middleware, and state into an Axum app.

use axum::Router;
use tracing::{error, info};

use haven_core::config::AppConfig;
use haven_core::error::AppError;
use haven_core::result::AppResult;
use haven_store::{Store, seed};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Creates the store, loads seed data, and wires the auth core.
///
/// Fails when the signing secret is empty and the configuration demands one.
pub async fn init_state(config: AppConfig) -> AppResult<AppState> {
    config.auth.check_secret()?;

    let store = Store::new();
    seed::demo_content(&store).await?;

    let state = AppState::new(config, store);

    match state.config.auth.seed_admin_password.clone() {
        Some(password) => {
            let hash = state
                .password_hasher
                .hash_password_blocking(password)
                .await?;
            seed::admin_account(&state.store, &state.config.auth.seed_admin_email, hash).await?;
        }
        None => info!("No seed admin password configured, skipping admin account"),
    }

    Ok(state)
}

/// Runs the Haven server until Ctrl-C or SIGTERM.
pub async fn run_server(config: AppConfig) -> AppResult<()> {
    let addr = config.server.bind_address();
    let state = init_state(config).await?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Haven Communities API listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
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
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received, draining connections");
}
