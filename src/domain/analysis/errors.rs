//! Error types for the TOPSIS engine.
//!
//! Every precondition the engine checks has its own variant so callers can
//! tell a dimension problem from a bad impact marker or a zero column.
//!
//! # Error Code Mapping
//!
//! | Error | ErrorCode |
//! |-------|-----------|
//! | EmptyMatrix | ValidationFailed |
//! | RaggedMatrix | ValidationFailed |
//! | NonFiniteValue | ValidationFailed |
//! | DimensionMismatch | DimensionMismatch |
//! | InvalidImpact | InvalidImpact |
//! | NonFiniteWeight | ValidationFailed |
//! | DegenerateColumn | DegenerateColumn |

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while validating engine input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Decision matrix must contain at least one alternative and one criterion")]
    EmptyMatrix,

    #[error("Row {row} has {actual} criteria values, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Value at row {row}, column {column} is not a finite number")]
    NonFiniteValue { row: usize, column: usize },

    #[error("Number of {vector} must match the number of criteria columns (expected {expected}, got {actual})")]
    DimensionMismatch {
        vector: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Impacts must be either '+' or '-' (got '{symbol}' at position {position})")]
    InvalidImpact { position: usize, symbol: String },

    #[error("Weight at position {position} is not a finite number")]
    NonFiniteWeight { position: usize },

    #[error("Criterion column {column} is entirely zero and cannot be normalized")]
    DegenerateColumn { column: usize },
}

impl AnalysisError {
    /// Creates a dimension mismatch error for the named vector.
    pub fn dimension_mismatch(vector: &'static str, expected: usize, actual: usize) -> Self {
        AnalysisError::DimensionMismatch {
            vector,
            expected,
            actual,
        }
    }

    /// Creates an invalid impact error.
    pub fn invalid_impact(position: usize, symbol: impl Into<String>) -> Self {
        AnalysisError::InvalidImpact {
            position,
            symbol: symbol.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::EmptyMatrix
            | AnalysisError::RaggedMatrix { .. }
            | AnalysisError::NonFiniteValue { .. }
            | AnalysisError::NonFiniteWeight { .. } => ErrorCode::ValidationFailed,
            AnalysisError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            AnalysisError::InvalidImpact { .. } => ErrorCode::InvalidImpact,
            AnalysisError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            AnalysisError::DimensionMismatch {
                vector,
                expected,
                actual,
            } => domain
                .with_detail("vector", vector)
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            AnalysisError::InvalidImpact { position, symbol } => domain
                .with_detail("position", position.to_string())
                .with_detail("symbol", symbol),
            AnalysisError::DegenerateColumn { column } => {
                domain.with_detail("column", column.to_string())
            }
            _ => domain,
        }
    }
}
