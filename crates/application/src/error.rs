//! Application error types

use thiserror::Error;
use requestor_domain::DomainError;

use crate::ports::SessionStoreError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The session store failed.
    #[error("storage error: {0}")]
    Storage(#[from] SessionStoreError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
