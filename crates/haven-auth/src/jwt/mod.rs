//! HS256 token issuance, verification, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod service;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use service::{TokenLifetimes, TokenService};
