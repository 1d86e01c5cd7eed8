//! Role-based access control.

pub mod gate;

pub use gate::RoleGate;
