//! Haven Communities API server.
//!
//! Loads `.env` and configuration, initializes logging, and runs the HTTP
//! server until a shutdown signal arrives.

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use haven_core::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let env = std::env::var("HAVEN_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;

    init_logging(&config.logging);

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded environment file"),
        Err(_) => info!("No .env file found, using process environment"),
    }
    info!(
        env = %env,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Haven Communities API"
    );

    haven_api::run_server(config).await?;
    Ok(())
}

/// Initialize tracing/logging. `RUST_LOG` overrides the configured level.
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
