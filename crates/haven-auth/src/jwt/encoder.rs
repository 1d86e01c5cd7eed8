//! Token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use haven_entity::user::UserRole;

use super::claims::Claims;
use crate::error::AuthError;

/// Creates HS256-signed tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder").finish_non_exhaustive()
    }
}

impl JwtEncoder {
    /// Creates an encoder for the given secret.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Issues a token valid from now for `valid_for`.
    pub fn issue(
        &self,
        user_id: &str,
        email: &str,
        role: UserRole,
        valid_for: Duration,
    ) -> Result<String, AuthError> {
        self.issue_at(user_id, email, role, valid_for, Utc::now())
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
        // Timestamps have whole-second resolution, so exp > iat needs >= 1s.
        if valid_for < Duration::seconds(1) {
            return Err(AuthError::SigningFailure(format!(
                "token lifetime must be at least one second, got {}ms",
                valid_for.num_milliseconds()
            )));
        }

        let issued_at = now.timestamp();
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            role,
            exp: (now + valid_for).timestamp(),
            iat: issued_at,
            nbf: issued_at,
        };

        self.sign(&claims)
    }

    /// Signs an already-built claims set.
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::SigningFailure(e.to_string()))
    }
}
