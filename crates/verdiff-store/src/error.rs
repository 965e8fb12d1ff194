use thiserror::Error;

/// Errors produced by report storage operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The string is not a well-formed report id.
    #[error("invalid report id: {0}")]
    InvalidId(String),
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
