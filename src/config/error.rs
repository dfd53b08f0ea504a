//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid CSV delimiter '{0}': expected one non-whitespace ASCII character")]
    InvalidDelimiter(String),

    #[error("Invalid parameter separator '{0}': expected one non-whitespace character")]
    InvalidSeparator(String),

    #[error("Output column name must not be empty: {0}")]
    EmptyColumnName(&'static str),

    #[error("Score and rank columns share the name '{0}'")]
    DuplicateColumnName(String),

    #[error("Precision {0} exceeds maximum allowed (17)")]
    PrecisionTooLarge(usize),
}
