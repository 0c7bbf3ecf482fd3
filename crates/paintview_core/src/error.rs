//! Application error types for core store and domain logic.
use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A catalog or counter store could not be read or written. Retryable;
    /// the core performs no internal retry.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal server error")]
    Internal,
}
