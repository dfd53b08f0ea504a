//! Output configuration

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;
use super::input::validate_delimiter;
use crate::adapters::ResultLayout;

/// Largest useful number of fractional digits for an f64.
pub const MAX_PRECISION: usize = 17;

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Result file format
    #[serde(default)]
    pub format: OutputFormat,

    /// CSV field delimiter for written results
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Fixed number of fractional digits for scores (shortest form when unset)
    pub precision: Option<usize>,

    /// Header of the appended score column
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Header of the appended rank column
    #[serde(default = "default_rank_column")]
    pub rank_column: String,
}

/// Result file format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputConfig {
    /// Delimiter as the byte the CSV writer expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    /// Column names and precision for the result writers.
    pub fn layout(&self) -> ResultLayout {
        ResultLayout {
            score_column: self.score_column.clone(),
            rank_column: self.rank_column.clone(),
            precision: self.precision,
        }
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_delimiter(&self.delimiter)?;
        if self.score_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("output.score_column"));
        }
        if self.rank_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("output.rank_column"));
        }
        if self.score_column == self.rank_column {
            return Err(ValidationError::DuplicateColumnName(
                self.score_column.clone(),
            ));
        }
        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                return Err(ValidationError::PrecisionTooLarge(precision));
            }
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            delimiter: default_delimiter(),
            precision: None,
            score_column: default_score_column(),
            rank_column: default_rank_column(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format '{}' (expected csv or json)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_score_column() -> String {
    "Performance Score".to_string()
}

fn default_rank_column() -> String {
    "Rank".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.precision, None);
        assert_eq!(config.layout(), ResultLayout::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_output_config_deserialization() {
        let json = r#"{
            "format": "json",
            "precision": 4,
            "score_column": "Score"
        }"#;

        let config: OutputConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.precision, Some(4));
        assert_eq!(config.score_column, "Score");
        assert_eq!(config.rank_column, "Rank");
    }

    #[test]
    fn test_validation_duplicate_columns() {
        let config = OutputConfig {
            rank_column: "Performance Score".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::DuplicateColumnName(
                "Performance Score".to_string()
            ))
        );
    }

    #[test]
    fn test_validation_empty_column() {
        let config = OutputConfig {
            score_column: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyColumnName("output.score_column"))
        );
    }

    #[test]
    fn test_validation_precision_limit() {
        let config = OutputConfig {
            precision: Some(17),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = OutputConfig {
            precision: Some(18),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::PrecisionTooLarge(18)));
    }
}
