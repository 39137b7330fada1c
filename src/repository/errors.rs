use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,
    /// Stored data failed domain validation.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// The backing store refused the operation.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
