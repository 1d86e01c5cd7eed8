//! Application configuration schemas.
//!
//! Configuration is merged from optional TOML files, `HAVEN__`-prefixed
//! environment variables, and the two bare variables the deployment has
//! always used (`JWT_SECRET`, `PORT`). Each sub-module represents a logical
//! configuration section.

pub mod app;
pub mod auth;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Uploaded image settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    ///
    /// Sources, lowest precedence first: `config/default.toml`,
    /// `config/{env}.toml`, `HAVEN__SECTION__KEY` variables, then `JWT_SECRET`
    /// and `PORT`. Every file is optional.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let port = std::env::var("PORT")
            .ok()
            .map(|p| {
                p.parse::<i64>()
                    .map_err(|e| AppError::configuration(format!("Invalid PORT '{p}': {e}")))
            })
            .transpose()?;

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("HAVEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.jwt_secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("server.port", port)?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
