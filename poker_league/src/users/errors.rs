//! User directory error types.

use super::models::UserId;
use crate::store::StorageError;
use thiserror::Error;

/// User directory errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No user with the given id
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for user directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
