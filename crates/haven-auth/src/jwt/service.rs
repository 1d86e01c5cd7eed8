//! Token service: the single owner of the signing secret.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use haven_core::config::AuthConfig;
use haven_entity::user::UserRole;

use super::claims::Claims;
use super::decoder::JwtDecoder;
use super::encoder::JwtEncoder;
use crate::error::AuthError;

/// Lifetimes callers pick per token purpose. The service itself is
/// duration-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    /// Short-lived token presented on every request.
    pub access: Duration,
    /// Long-lived token exchanged for new access tokens.
    pub refresh: Duration,
}

impl TokenLifetimes {
    /// Lifetimes from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            access: config.access_ttl(),
            refresh: config.refresh_ttl(),
        }
    }
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            access: Duration::hours(24),
            refresh: Duration::days(7),
        }
    }
}

/// Result of a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// Issues and verifies identity tokens.
///
/// Built once at startup from the configured secret and shared read-only
/// across request tasks. The secret never changes for the lifetime of the
/// process.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    lifetimes: TokenLifetimes,
}

impl TokenService {
    /// Creates a service for `secret` with the given lifetimes.
    pub fn new(secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            encoder: JwtEncoder::new(secret),
            decoder: JwtDecoder::new(secret),
            lifetimes,
        }
    }

    /// Creates a service from auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            TokenLifetimes::from_config(config),
        )
    }

    /// Configured lifetimes.
    pub fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }

    /// Issues a token valid for `valid_for` from now.
    pub fn issue(
        &self,
        user_id: &str,
        email: &str,
        role: UserRole,
        valid_for: Duration,
    ) -> Result<String, AuthError> {
        self.encoder.issue(user_id, email, role, valid_for)
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        user_id: &str,
        email: &str,
        role: UserRole,
        valid_for: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        self.encoder.issue_at(user_id, email, role, valid_for, now)
    }

    /// Verifies a token at the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.decoder.verify(token)
    }

    /// Verifies a token as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        self.decoder.verify_at(token, now)
    }

    /// Issues an access and a refresh token for the same identity.
    pub fn issue_pair(
        &self,
        user_id: &str,
        email: &str,
        role: UserRole,
    ) -> Result<TokenPair, AuthError> {
        let access_token = self.issue(user_id, email, role, self.lifetimes.access)?;
        let refresh_token = self.issue(user_id, email, role, self.lifetimes.refresh)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.lifetimes.access.num_seconds(),
        })
    }

    /// Mints a fresh access token from a verified refresh token.
    ///
    /// Any token that verifies is accepted here, including access tokens.
    pub fn refresh(&self, refresh_token: &str) -> Result<(String, i64), AuthError> {
        let claims = self.verify(refresh_token)?;
        let access_token = self.issue(
            &claims.user_id,
            &claims.email,
            claims.role,
            self.lifetimes.access,
        )?;
        Ok((access_token, self.lifetimes.access.num_seconds()))
    }
}
