//! Authentication error taxonomy.
//!
//! Variants keep the precise reason for server-side logs. Conversion into
//! [`AppError`] collapses them into the coarse client-facing classes so a
//! caller cannot tell an expired token from a forged one.

use std::fmt;

use thiserror::Error;

use haven_core::error::{AppError, ErrorKind};
use haven_entity::user::UserRole;

/// Why a token failed verification. Logged, never returned to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    /// Not a decodable compact token, or the claims do not match the schema.
    Malformed(String),
    /// Signed with an algorithm other than HS256.
    Algorithm,
    /// Signature does not match the configured secret.
    Signature,
    /// Current time is past `exp`.
    Expired,
    /// Current time is before `nbf`.
    NotYetValid,
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(detail) => write!(f, "malformed token: {detail}"),
            Self::Algorithm => write!(f, "unexpected signing algorithm"),
            Self::Signature => write!(f, "signature mismatch"),
            Self::Expired => write!(f, "token expired"),
            Self::NotYetValid => write!(f, "token not yet valid"),
        }
    }
}

/// Errors raised by the auth core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token construction failed.
    #[error("failed to sign token: {0}")]
    SigningFailure(String),
    /// Any token verification failure.
    #[error("invalid token: {0}")]
    InvalidToken(TokenRejection),
    /// The hash computation itself failed. A mismatch is not an error.
    #[error("failed to hash password: {0}")]
    HashingFailure(String),
    /// No `Authorization` header on a protected route.
    #[error("authorization header is missing")]
    MissingHeader,
    /// `Authorization` header present but not `Bearer <token>`.
    #[error("authorization header is malformed")]
    MalformedHeader,
    /// Authenticated, but the role lacks the required privilege.
    #[error("{required} role required, caller has {}", describe_role(.actual))]
    Forbidden {
        /// Role the route demands.
        required: UserRole,
        /// Role attached to the request, if any.
        actual: Option<UserRole>,
    },
}

fn describe_role(role: &Option<UserRole>) -> &'static str {
    role.map(|r| r.as_str()).unwrap_or("no identity")
}

impl AuthError {
    /// Coarse error class used at the HTTP boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidToken(_) | Self::MissingHeader | Self::MalformedHeader => {
                ErrorKind::Unauthorized
            }
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::SigningFailure(_) | Self::HashingFailure(_) => ErrorKind::Internal,
        }
    }

    /// Message safe to show to the client.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::SigningFailure(_) => "Failed to generate token",
            Self::InvalidToken(_) => "Invalid or expired token",
            Self::HashingFailure(_) => "Failed to process credentials",
            Self::MissingHeader => "Authorization header is missing",
            Self::MalformedHeader => "Invalid authorization header format",
            Self::Forbidden {
                required: UserRole::Admin,
                ..
            } => "Admin access required",
            Self::Forbidden { .. } => "Insufficient privileges",
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        let kind = err.kind();
        let message = err.client_message();
        AppError::with_source(kind, message, err)
    }
}
