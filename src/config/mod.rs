//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! `topsis.toml` file and environment variables using the `config` and
//! `dotenvy` crates. Environment variables use the `TOPSIS` prefix and nested
//! values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use topsis::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Writing {} output", config.output.format);
//! ```

mod error;
mod input;
mod logging;
mod output;
mod parameters;

pub use error::{ConfigError, ValidationError};
pub use input::InputConfig;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat, MAX_PRECISION};
pub use parameters::ParametersConfig;

use serde::Deserialize;
use std::path::Path;

/// Name of the optional configuration file, looked up without extension.
pub const DEFAULT_CONFIG_FILE: &str = "topsis";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Input table reading (CSV delimiter)
    #[serde(default)]
    pub input: InputConfig,

    /// Weight and impact list parsing
    #[serde(default)]
    pub parameters: ParametersConfig,

    /// Result format, precision, and column names
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the default file and environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads `topsis.toml` (or `.json`, `.yaml`) from the working directory if present
    /// 3. Reads environment variables with `TOPSIS` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// Environment variables take precedence over the file.
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__OUTPUT__PRECISION=4` -> `output.precision = 4`
    /// - `TOPSIS__INPUT__DELIMITER=;` -> `input.delimiter = ";"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
    }

    /// Load configuration from an explicit file plus environment variables
    ///
    /// Unlike [`AppConfig::load()`], the file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("TOPSIS").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.input.validate()?;
        self.parameters.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
