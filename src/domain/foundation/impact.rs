//! Impact value object: the preference direction of a criterion.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Whether higher or lower raw values are preferred for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    /// Higher is better (`+`).
    Benefit,
    /// Lower is better (`-`).
    Cost,
}

impl Impact {
    /// Parses a `+`/`-` marker, returning error for anything else.
    pub fn try_from_symbol(symbol: &str) -> Result<Self, ValidationError> {
        match symbol {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            other => Err(ValidationError::invalid_format(
                "impact",
                format!("'{}' must be either '+' or '-'", other),
            )),
        }
    }
}
