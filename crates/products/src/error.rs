//! Error types for data loading.

use std::path::PathBuf;

use stockdesk_core::DomainError;
use thiserror::Error;

/// Errors that can occur while loading a data file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Data file not found.
    #[error("data file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A header that the loader does not know how to interpret.
    #[error("unexpected column '{column}' in {path}: {reason}")]
    UnexpectedColumn {
        column: String,
        path: PathBuf,
        reason: String,
    },

    /// A cell failed validation.
    #[error("{path} row {row}, column '{column}': {source}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        #[source]
        source: DomainError,
    },
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
