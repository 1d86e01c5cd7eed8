//! Role gate applied after identity resolution.

use haven_entity::user::UserRole;

use crate::error::AuthError;
use crate::identity::RequestIdentity;

/// Admits only identities holding exactly the required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGate {
    required: UserRole,
}

impl RoleGate {
    /// Gate requiring `required`.
    pub const fn new(required: UserRole) -> Self {
        Self { required }
    }

    /// Gate for admin-only routes.
    pub const fn admin() -> Self {
        Self::new(UserRole::Admin)
    }

    /// Checks the identity attached to a request.
    ///
    /// A missing identity fails the same way as a wrong role: the gate never
    /// admits a request it cannot positively attribute.
    pub fn check(&self, identity: Option<&RequestIdentity>) -> Result<(), AuthError> {
        match identity {
            Some(identity) if identity.role == self.required => Ok(()),
            other => Err(AuthError::Forbidden {
                required: self.required,
                actual: other.map(|i| i.role),
            }),
        }
    }
}
