//! Runtime configuration read from the process environment.
//!
//! Environment variables must be set by the caller's shell or wrapper; there
//! is no config file. Command line flags take precedence over every value
//! here.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const LOG_ENV: &str = "SCOREKEEPER_LOG";
pub const LOG_FORMAT_ENV: &str = "SCOREKEEPER_LOG_FORMAT";
pub const OUTPUT_FORMAT_ENV: &str = "SCOREKEEPER_FORMAT";

const DEFAULT_LOG_FILTER: &str = "warn";

/// How log lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "{LOG_FORMAT_ENV} must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

/// How scores are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(AppError::config(format!(
                "{OUTPUT_FORMAT_ENV} must be 'table', 'json' or 'csv', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` still wins when set.
    pub log_filter: String,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl RuntimeConfig {
    /// Build the configuration from `SCOREKEEPER_*` variables.
    ///
    /// Unset or empty variables fall back to defaults; unrecognised values
    /// are configuration errors rather than silently ignored.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let log_filter = non_empty_var(LOG_ENV).unwrap_or(defaults.log_filter);
        let log_format = non_empty_var(LOG_FORMAT_ENV)
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(defaults.log_format);
        let output_format = non_empty_var(OUTPUT_FORMAT_ENV)
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(defaults.output_format);

        Ok(Self {
            log_filter,
            log_format,
            output_format,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
