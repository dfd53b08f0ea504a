//! Weight and impact parameter configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Parameter list configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ParametersConfig {
    /// Separator between weight and impact entries
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl ParametersConfig {
    /// Separator as a character.
    ///
    /// Only meaningful after [`ParametersConfig::validate`] succeeds.
    pub fn separator_char(&self) -> char {
        self.separator.chars().next().unwrap_or(',')
    }

    /// Validate parameter configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            // '+' and '-' are impact markers and '.' is the decimal point
            (Some(c), None) if !c.is_whitespace() && !matches!(c, '+' | '-' | '.') => Ok(()),
            _ => Err(ValidationError::InvalidSeparator(self.separator.clone())),
        }
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

fn default_separator() -> String {
    ",".to_string()
}
