//! The in-memory record set every view reads from
//!
//! A [`Vault`] is seeded once at startup, either from the built-in dataset or
//! from a seed file, and is never written back anywhere.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ErrorCode, Result, VaultError};
use crate::model::{Evidence, Request};

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

/// Evidence documents plus the buyer request queue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vault {
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    #[serde(default)]
    pub requests: Vec<Request>,
}

impl Vault {
    /// The dataset shipped with the binary
    pub fn builtin() -> Result<Self> {
        serde_json::from_str(BUILTIN_SEED).map_err(|e| {
            VaultError::data_with_code(
                ErrorCode::DATA_INVALID_JSON,
                "Built-in seed data is malformed",
                None,
            )
            .with_source(e)
        })
    }

    /// Read a seed file; `.yaml`/`.yml` files parse as YAML, anything else as JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            VaultError::data_with_code(
                ErrorCode::DATA_READ_FAILED,
                "Failed to read seed file",
                Some(path.to_path_buf()),
            )
            .with_source(e)
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let vault: Vault = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| {
                VaultError::data_with_code(
                    ErrorCode::DATA_INVALID_YAML,
                    "Invalid YAML syntax",
                    Some(path.to_path_buf()),
                )
                .with_source(e)
            })?
        } else {
            serde_json::from_str(&content).map_err(|e| {
                VaultError::data_with_code(
                    ErrorCode::DATA_INVALID_JSON,
                    "Invalid JSON syntax",
                    Some(path.to_path_buf()),
                )
                .with_source(e)
            })?
        };

        info!(
            "Loaded {} evidence records and {} requests from {}",
            vault.evidence.len(),
            vault.requests.len(),
            path.display()
        );
        Ok(vault)
    }

    /// Load from `path` when given, otherwise fall back to the built-in dataset
    pub fn from_source(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using built-in seed data");
                Self::builtin()
            }
        }
    }

    /// Look up an evidence record; unknown ids resolve to `None`
    pub fn find_evidence(&self, id: &str) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == id)
    }

    pub fn find_request(&self, id: &str) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }
}
