//! Foundation error model.

use thiserror::Error;

/// Result type used by the foundation layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Foundation-level error.
///
/// Keep this focused on failures of the shared primitives (identifier
/// parsing, malformed foundation values). Business-rule failures belong to
/// the domain crates as typed errors of their own, so callers can match on
/// them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
