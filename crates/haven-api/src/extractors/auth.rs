//! `CurrentUser` extractor: reads the identity attached by the identity
//! middleware.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use haven_auth::RequestIdentity;

/// The caller's identity, if the identity middleware attached one.
///
/// Extraction never fails. The string accessors return `""` when no
/// identity is present, which only happens on routes outside the protected
/// groups.
#[derive(Debug, Clone, Default)]
pub struct CurrentUser(pub Option<RequestIdentity>);

impl CurrentUser {
    /// The attached identity.
    pub fn identity(&self) -> Option<&RequestIdentity> {
        self.0.as_ref()
    }

    /// Subject id, or `""`.
    pub fn user_id(&self) -> &str {
        self.0.as_ref().map(|i| i.user_id.as_str()).unwrap_or("")
    }

    /// E-mail, or `""`.
    pub fn email(&self) -> &str {
        self.0.as_ref().map(|i| i.email.as_str()).unwrap_or("")
    }

    /// Role name, or `""`.
    pub fn role(&self) -> &str {
        self.0.as_ref().map(|i| i.role.as_str()).unwrap_or("")
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<RequestIdentity>().cloned()))
    }
}
