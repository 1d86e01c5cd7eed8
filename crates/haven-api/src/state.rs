//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use haven_auth::{PasswordHasher, PasswordValidator, TokenService};
use haven_core::config::AppConfig;
use haven_store::Store;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Fields are
/// `Arc`-wrapped or handle types so cloning per request is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Token issuance and verification; owns the signing secret
    pub tokens: Arc<TokenService>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Signup password policy
    pub password_validator: Arc<PasswordValidator>,
    /// Repositories
    pub store: Store,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wires the auth core from configuration around an existing store.
    pub fn new(config: AppConfig, store: Store) -> Self {
        let tokens = TokenService::from_config(&config.auth);
        let password_validator = PasswordValidator::new(&config.auth);

        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            password_hasher: Arc::new(PasswordHasher::new()),
            password_validator: Arc::new(password_validator),
            store,
            started_at: Instant::now(),
        }
    }
}
