//! Table I/O Ports - Loading decision tables and persisting ranked results.
//!
//! The application depends on these traits, while adapters (CSV, JSON,
//! in-memory) provide the implementation.

use std::path::Path;
use thiserror::Error;

use crate::domain::analysis::{DecisionTable, RankedTable};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Minimum column count of an input table: one identifier plus two criteria.
pub const MIN_TABLE_COLUMNS: usize = 3;

/// Port for loading a decision table.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first column as the alternative identifier
/// - Parse every remaining column as a numeric criterion
/// - Keep the raw criterion cell text for passthrough on output
/// - Reject tables with fewer than [`MIN_TABLE_COLUMNS`] columns
pub trait TableReader: Send + Sync {
    /// Reads the table stored at `location`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing exists at `location`
    /// - `TooFewColumns` if the header has fewer than three columns
    /// - `Malformed` for unparsable cells or ragged records
    fn read(&self, location: &Path) -> Result<DecisionTable, TableIoError>;
}

/// Port for persisting a ranked table.
///
/// # Contract
///
/// Implementations must keep the identifier column and the original
/// criterion cells unchanged, adding the score and rank for each row.
pub trait ResultWriter: Send + Sync {
    /// Writes `ranked` to `location`, replacing any existing content.
    fn write(&self, location: &Path, ranked: &RankedTable) -> Result<(), TableIoError>;
}

/// Errors that can occur while reading or writing tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIoError {
    /// Input file was not found.
    #[error("Input file '{path}' does not exist")]
    NotFound { path: String },

    /// Input has fewer columns than required.
    #[error("Input file must contain three or more columns (found {found})")]
    TooFewColumns { found: usize },

    /// Input could not be parsed.
    #[error("Malformed input at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    /// IO error during file operation.
    #[error("IO error: {message}")]
    Io { message: String },

    /// Output could not be serialized.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl TableIoError {
    /// Creates a not found error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Creates a malformed input error.
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TableIoError::NotFound { .. } => ErrorCode::MissingInput,
            TableIoError::TooFewColumns { .. } | TableIoError::Malformed { .. } => {
                ErrorCode::MalformedInput
            }
            TableIoError::Io { .. } => ErrorCode::IoError,
            TableIoError::Serialization { .. } => ErrorCode::InternalError,
        }
    }
}

impl From<std::io::Error> for TableIoError {
    fn from(err: std::io::Error) -> Self {
        TableIoError::io(err.to_string())
    }
}

impl From<TableIoError> for DomainError {
    fn from(err: TableIoError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
