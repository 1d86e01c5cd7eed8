//! `Authorization: Bearer <token>` header parsing.

use crate::error::AuthError;

/// Authentication scheme accepted on protected routes.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extracts the token from a raw `Authorization` header value.
///
/// `None` means the header was absent. The value must be exactly two
/// whitespace-separated parts, the first being the literal `Bearer`
/// (case-sensitive). Anything else is malformed.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;

    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(BEARER_SCHEME), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
