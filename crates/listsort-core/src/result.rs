//! Convenience result type alias for listsort.

use crate::error::AppError;

/// A specialized `Result` type for listsort operations.
pub type AppResult<T> = Result<T, AppError>;
