//! Argon2id password hashing and verification.
//!
//! Hashing with the default parameters costs tens of milliseconds of CPU in
//! release builds. Request handlers use the `*_blocking` variants so the work
//! runs on Tokio's blocking pool instead of a reactor thread.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::error::AuthError;

/// Handles password hashing and verification using Argon2id.
///
/// Digests are PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`)
/// carrying the algorithm, cost parameters, and salt. They are stored
/// verbatim and are opaque to callers.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashingFailure(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored digest.
    ///
    /// Returns `false` on mismatch, on a digest that cannot be parsed, and on
    /// any internal failure. Never errors.
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!(error = %e, "Stored password hash is malformed");
                return false;
            }
        };

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => true,
            Err(argon2::password_hash::Error::Password) => false,
            Err(e) => {
                tracing::warn!(error = %e, "Password verification failed");
                false
            }
        }
    }

    /// [`hash_password`](Self::hash_password) on the blocking pool.
    pub async fn hash_password_blocking(&self, password: String) -> Result<String, AuthError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AuthError::HashingFailure(format!("hashing task failed: {e}")))?
    }

    /// [`verify_password`](Self::verify_password) on the blocking pool.
    pub async fn verify_password_blocking(&self, password: String, hash: String) -> bool {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Password verification task failed");
                false
            })
    }
}
