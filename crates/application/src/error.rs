//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (network failure, non-2xx status)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Response was received but did not match the expected shape
    #[error("Unexpected response shape: {0}")]
    DataShape(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    ///
    /// Only transient network failures are retried; a malformed response
    /// will stay malformed no matter how often it is re-fetched.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}
