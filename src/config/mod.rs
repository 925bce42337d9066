//! Configuration for the evidence-vault binary
//!
//! Settings are layered, lowest priority first:
//!
//! 1. Hardcoded defaults
//! 2. User config file (`<config dir>/evidence-vault/config.toml`)
//! 3. Project config file (`.evidence-vault/config.toml`)
//! 4. Environment variables (`EVIDENCE_VAULT_*`)
//!
//! An explicit `--config` path replaces both file layers.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::ConfigLoader;

use crate::error::{ErrorCode, Result, VaultError};
use crate::requests::DEFAULT_DUE_SOON_DAYS;

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// How command output is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Seed file replacing the built-in dataset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Requests due within this many days show a "days left" hint.
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: u32,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_due_soon_days() -> u32 {
    DEFAULT_DUE_SOON_DAYS
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            data_file: None,
            due_soon_days: default_due_soon_days(),
            format: OutputFormat::default(),
        }
    }
}

/// A config file layer; every field optional so it only overrides what it sets
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    pub log_level: Option<String>,
    pub data_file: Option<PathBuf>,
    pub due_soon_days: Option<u32>,
    pub format: Option<OutputFormat>,
}

impl VaultConfig {
    pub fn merge(&mut self, layer: PartialConfig) {
        if let Some(level) = layer.log_level {
            self.log_level = level;
        }
        if let Some(path) = layer.data_file {
            self.data_file = Some(path);
        }
        if let Some(days) = layer.due_soon_days {
            self.due_soon_days = days;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
    }

    /// Apply `EVIDENCE_VAULT_*` overrides read through `lookup`
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("EVIDENCE_VAULT_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(path) = lookup("EVIDENCE_VAULT_DATA_FILE") {
            self.data_file = Some(PathBuf::from(path));
        }

        if let Some(days) = lookup("EVIDENCE_VAULT_DUE_SOON_DAYS") {
            self.due_soon_days = days.trim().parse().map_err(|_| {
                VaultError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("EVIDENCE_VAULT_DUE_SOON_DAYS must be a whole number, got '{}'", days),
                    None,
                )
            })?;
        }

        if let Some(format) = lookup("EVIDENCE_VAULT_FORMAT") {
            self.format = match format.trim().to_ascii_lowercase().as_str() {
                "human" => OutputFormat::Human,
                "json" => OutputFormat::Json,
                "yaml" => OutputFormat::Yaml,
                other => {
                    return Err(VaultError::config_with_code(
                        ErrorCode::CONFIG_INVALID_VALUE,
                        format!("Unknown output format '{}'", other),
                        None,
                    ))
                }
            };
        }

        Ok(())
    }

    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_with(|key| std::env::var(key).ok())
    }

    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(VaultError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!(
                    "Invalid log level '{}' (expected one of: {})",
                    self.log_level,
                    VALID_LOG_LEVELS.join(", ")
                ),
                None,
            ));
        }
        Ok(())
    }
}
