//! Convenience result type alias for Haven.

use crate::error::AppError;

/// A specialized `Result` type for Haven operations.
pub type AppResult<T> = Result<T, AppError>;
