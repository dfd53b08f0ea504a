//! Input table configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Input table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// CSV field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl InputConfig {
    /// Delimiter as the byte the CSV reader expects.
    ///
    /// Only meaningful after [`InputConfig::validate`] succeeds.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_delimiter(&self.delimiter)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// A CSV delimiter must be exactly one non-whitespace ASCII character.
pub(crate) fn validate_delimiter(delimiter: &str) -> Result<(), ValidationError> {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && !c.is_ascii_whitespace() && !c.is_ascii_control() => {
            Ok(())
        }
        _ => Err(ValidationError::InvalidDelimiter(delimiter.to_string())),
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_config_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.delimiter, ",");
        assert_eq!(config.delimiter_byte(), b',');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_semicolon_delimiter() {
        let config = InputConfig {
            delimiter: ";".to_string(),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.delimiter_byte(), b';');
    }

    #[test]
    fn test_validation_rejects_bad_delimiters() {
        for bad in ["", ";;", " ", "\t", "é"] {
            let config = InputConfig {
                delimiter: bad.to_string(),
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidDelimiter(bad.to_string())),
                "delimiter {:?} should be rejected",
                bad
            );
        }
    }
}
