//! Inventory store errors.

use std::path::PathBuf;

use stockdesk_core::DomainError;
use thiserror::Error;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors surfaced by the inventory store.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Bad input or a key mismatch; the table was left unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backing file holds a row that violates the record rules.
    #[error("{path} row {row}: {source}")]
    InvalidRow {
        path: PathBuf,
        row: usize,
        #[source]
        source: DomainError,
    },

    /// The backing file's header is not the inventory header.
    #[error("{path}: unexpected header '{found}'")]
    InvalidHeader { path: PathBuf, found: String },

    /// The backing file could not be parsed as CSV.
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification used by callers to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Duplicate,
    Io,
}

impl InventoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Domain(DomainError::Validation(_)) => ErrorKind::Validation,
            InventoryError::Domain(DomainError::NotFound(_)) => ErrorKind::NotFound,
            InventoryError::Domain(DomainError::Duplicate(_)) => ErrorKind::Duplicate,
            InventoryError::InvalidRow { .. } | InventoryError::InvalidHeader { .. } => {
                ErrorKind::Validation
            }
            InventoryError::Csv { source, .. } if source.is_io_error() => ErrorKind::Io,
            InventoryError::Csv { .. } => ErrorKind::Validation,
            InventoryError::Read { .. } | InventoryError::Write { .. } => ErrorKind::Io,
        }
    }

    /// Reported mismatches (not found, duplicate): nothing changed, nothing broke.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound | ErrorKind::Duplicate)
    }
}
