//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and credential configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for token signing (HMAC-SHA256). Loaded once at startup.
    #[serde(default)]
    pub jwt_secret: String,
    /// Refuse to start when `jwt_secret` is empty.
    #[serde(default)]
    pub require_secret: bool,
    /// Access token lifetime in hours.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_hours: u64,
    /// Refresh token lifetime in days.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_days: u64,
    /// Minimum password length accepted at signup.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// E-mail of the administrator account seeded into the store.
    #[serde(default = "default_seed_admin_email")]
    pub seed_admin_email: String,
    /// Password of the seeded administrator. No admin is seeded when unset.
    #[serde(default)]
    pub seed_admin_password: Option<String>,
}

impl AuthConfig {
    /// Access token lifetime.
    pub fn access_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.access_ttl_hours as i64)
    }

    /// Refresh token lifetime.
    pub fn refresh_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.refresh_ttl_days as i64)
    }

    /// Checks the signing secret at startup.
    ///
    /// An empty secret is accepted with a warning unless `require_secret`
    /// is set, in which case startup fails.
    pub fn check_secret(&self) -> Result<(), AppError> {
        if !self.jwt_secret.is_empty() {
            return Ok(());
        }
        if self.require_secret {
            return Err(AppError::configuration(
                "JWT_SECRET is empty and auth.require_secret is enabled",
            ));
        }
        tracing::warn!(
            "JWT_SECRET is empty; tokens are signed with an empty key and can be forged"
        );
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            require_secret: false,
            access_ttl_hours: default_access_ttl(),
            refresh_ttl_days: default_refresh_ttl(),
            password_min_length: default_password_min(),
            seed_admin_email: default_seed_admin_email(),
            seed_admin_password: None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("require_secret", &self.require_secret)
            .field("access_ttl_hours", &self.access_ttl_hours)
            .field("refresh_ttl_days", &self.refresh_ttl_days)
            .field("password_min_length", &self.password_min_length)
            .field("seed_admin_email", &self.seed_admin_email)
            .finish()
    }
}

fn default_access_ttl() -> u64 {
    24
}

fn default_refresh_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    6
}

fn default_seed_admin_email() -> String {
    "admin@havencommunities.com".to_string()
}
