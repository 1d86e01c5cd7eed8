//! Token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use super::claims::Claims;
use crate::error::{AuthError, TokenRejection};

/// Verifies HS256 tokens against the process secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Signature/algorithm validation. Time checks are done in `verify_at`.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a decoder for the given secret.
    pub fn new(secret: &[u8]) -> Self {
        // Only HS256 is listed, so a header naming any other algorithm
        // (RS256, ES256, HS512, ...) is rejected before the signature is
        // checked.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "nbf", "iat"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verifies a token at the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`.
    ///
    /// Every failure is reported as [`AuthError::InvalidToken`]; the
    /// [`TokenRejection`] inside is for logs only.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            let reason = match e.kind() {
                JwtErrorKind::InvalidAlgorithm | JwtErrorKind::InvalidAlgorithmName => {
                    TokenRejection::Algorithm
                }
                JwtErrorKind::InvalidSignature => TokenRejection::Signature,
                _ => TokenRejection::Malformed(e.to_string()),
            };
            AuthError::InvalidToken(reason)
        })?;

        let claims = data.claims;
        let now = now.timestamp();

        if !claims.is_valid_at(now) {
            let reason = if now < claims.nbf {
                TokenRejection::NotYetValid
            } else {
                TokenRejection::Expired
            };
            return Err(AuthError::InvalidToken(reason));
        }

        Ok(claims)
    }
}
