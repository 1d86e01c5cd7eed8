//! # haven-auth
//!
//! Authentication and authorization core for the Haven Communities API.
//!
//! ## Modules
//!
//! - `password`: Argon2id credential hashing and signup password policy
//! - `jwt`: HS256 token issuance and verification
//! - `bearer`: `Authorization: Bearer` header parsing
//! - `identity`: typed per-request identity derived from verified claims
//! - `rbac`: role gate applied after identity resolution
//! - `error`: internal auth error taxonomy and its mapping to `AppError`

pub mod bearer;
pub mod error;
pub mod identity;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use error::{AuthError, TokenRejection};
pub use identity::RequestIdentity;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenLifetimes, TokenService};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::RoleGate;
