//! Typed per-request identity.

use haven_entity::user::UserRole;

use crate::jwt::Claims;

/// Identity resolved from a verified token and attached to the request.
///
/// Created once by the identity middleware and read-only afterwards; it is
/// dropped with the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    /// Subject identifier.
    pub user_id: String,
    /// E-mail from the token.
    pub email: String,
    /// Role from the token.
    pub role: UserRole,
}

impl RequestIdentity {
    /// Whether the caller holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<Claims> for RequestIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            role: claims.role,
        }
    }
}
