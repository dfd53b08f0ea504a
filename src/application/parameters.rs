//! Parameter parsing for weight and impact strings.
//!
//! Weights arrive as `"1,1,1,2"` and impacts as `"+,+,-,+"`. Impact markers are
//! only split here; the engine validates them so its check order holds.

use crate::domain::foundation::ValidationError;

/// Parses a delimited list of weights.
///
/// Entries are trimmed before parsing.
///
/// # Errors
/// - `EmptyField` for an empty entry (`"1,,2"`, or an empty string)
/// - `InvalidFormat` for an entry that is not a number
pub fn parse_weights(text: &str, separator: char) -> Result<Vec<f64>, ValidationError> {
    text.split(separator)
        .enumerate()
        .map(|(position, entry)| {
            let field = format!("weights[{}]", position);
            let entry = entry.trim();
            if entry.is_empty() {
                return Err(ValidationError::empty_field(field));
            }
            entry.parse::<f64>().map_err(|_| {
                ValidationError::invalid_format(field, format!("'{}' is not a number", entry))
            })
        })
        .collect()
}

/// Splits a delimited list of impact markers, trimming each one.
pub fn split_impacts(text: &str, separator: char) -> Vec<String> {
    text.split(separator)
        .map(|symbol| symbol.trim().to_string())
        .collect()
}
