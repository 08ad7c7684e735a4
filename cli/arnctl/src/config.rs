//! CLI configuration (env-driven).
//!
//! Flags given on the command line override these values.

use anyhow::{Context, Result};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format used when `--format` is not given.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("ARNCTL_LOG_LEVEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_level);

        let format = lookup("ARNCTL_FORMAT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()
            .map_err(anyhow::Error::msg)
            .context("ARNCTL_FORMAT must be 'table' or 'json'.")?
            .unwrap_or(defaults.format);

        Ok(Self { log_level, format })
    }
}
