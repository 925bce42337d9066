use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{PartialConfig, VaultConfig};
use crate::error::{ErrorCode, Result, VaultError};

const CONFIG_FILE: &str = "config.toml";
const PROJECT_DIR: &str = ".evidence-vault";

/// Resolves and merges the configuration layers
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    user_dir: Option<PathBuf>,
    project_root: Option<PathBuf>,
    explicit: Option<PathBuf>,
}

/// The per-user configuration directory, if the platform has one
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "evidence-vault", "evidence-vault")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

impl ConfigLoader {
    /// Loader using the platform user directory and the current directory
    pub fn new() -> Self {
        Self {
            user_dir: user_config_dir(),
            project_root: std::env::current_dir().ok(),
            explicit: None,
        }
    }

    pub fn with_user_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.user_dir = dir;
        self
    }

    pub fn with_project_root(mut self, root: Option<PathBuf>) -> Self {
        self.project_root = root;
        self
    }

    /// Use exactly this file instead of the user and project files
    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// File layers in ascending priority
    fn file_layers(&self) -> Vec<(PathBuf, bool)> {
        if let Some(path) = &self.explicit {
            return vec![(path.clone(), true)];
        }

        let mut layers = Vec::new();
        if let Some(dir) = &self.user_dir {
            layers.push((dir.join(CONFIG_FILE), false));
        }
        if let Some(root) = &self.project_root {
            layers.push((root.join(PROJECT_DIR).join(CONFIG_FILE), false));
        }
        layers
    }

    /// Merge file layers over the defaults, without environment overrides
    pub fn load_files(&self) -> Result<VaultConfig> {
        let mut config = VaultConfig::default();

        for (path, required) in self.file_layers() {
            if !path.exists() {
                if required {
                    return Err(VaultError::config_with_code(
                        ErrorCode::CONFIG_NOT_FOUND,
                        "Configuration file not found",
                        Some(path),
                    ));
                }
                continue;
            }

            debug!("Loading configuration from {}", path.display());
            config.merge(read_layer(&path)?);
        }

        Ok(config)
    }

    /// Full resolution: files, then `EVIDENCE_VAULT_*` variables, then validation
    pub fn load(&self) -> Result<VaultConfig> {
        let mut config = self.load_files()?;
        config.merge_env_vars()?;
        config.validate()?;
        Ok(config)
    }
}

fn read_layer(path: &Path) -> Result<PartialConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        VaultError::config_with_code(
            ErrorCode::CONFIG_GENERIC,
            "Failed to read configuration file",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        VaultError::config_with_code(
            ErrorCode::CONFIG_PARSE_ERROR,
            "Invalid TOML in configuration file",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })
}
