//! Error types for registry loading and querying.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the registry file.
///
/// These never escape [`Loader::load`](crate::loader::Loader::load); they are
/// logged and replaced by an empty table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Registry file does not exist.
    #[error("registry file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the registry file.
    #[error("failed to read registry file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text or invalid UTF-8.
    #[error("failed to parse registry at line {line}: {message}")]
    CsvParse { line: u64, message: String },

    /// One or more retained columns are absent from the header row.
    #[error("required columns missing from registry header: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line).unwrap_or(0);
        Self::CsvParse {
            line,
            message: err.to_string(),
        }
    }
}

/// Operation-level failures of the query service.
///
/// Each variant carries the context echoed back in the error response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Normalised search term is shorter than the minimum.
    #[error("search term must be at least {min} characters")]
    TermTooShort { term: String, min: usize },

    /// The table failed to load or is empty.
    #[error("dataset not loaded")]
    DataUnavailable { term: String },

    /// No record carries the requested registry identifier.
    #[error("registry entry not found")]
    NotFound { registry_id: String },

    /// Unexpected failure while scanning or serialising.
    #[error("internal error: {details}")]
    Internal {
        details: String,
        /// Echoed search term, when the failure happened during a search.
        term: Option<String>,
    },
}

impl QueryError {
    /// HTTP status code this error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            QueryError::TermTooShort { .. } => 400,
            QueryError::NotFound { .. } => 404,
            QueryError::DataUnavailable { .. } | QueryError::Internal { .. } => 500,
        }
    }
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoadError>;
