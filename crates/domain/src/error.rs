//! Domain error types

use thiserror::Error;

/// Errors raised while parsing external input into domain values.
///
/// State transitions never fail; these only surface from parsing helpers
/// at the edges (method strings, request kinds, base URLs).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP method is not supported.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request kind is neither `http` nor `websocket`.
    #[error("unknown request kind: {0}")]
    UnknownRequestKind(String),

    /// The body type name is not one of the known variants.
    #[error("unknown body type: {0}")]
    UnknownBodyType(String),

    /// The query string could not be encoded.
    #[error("invalid query parameters: {0}")]
    InvalidQuery(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
