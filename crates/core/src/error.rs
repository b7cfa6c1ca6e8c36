//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable failures (bad input,
/// key mismatches). Filesystem and parsing failures belong to the crate that
/// performs the IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A keyed record was not found.
    #[error("'{0}' not found")]
    NotFound(String),

    /// A keyed record already exists.
    #[error("'{0}' already exists")]
    Duplicate(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::Duplicate(key.into())
    }

    /// Validation failures are bad input; the others are expected key mismatches.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
