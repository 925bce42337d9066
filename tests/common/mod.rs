//! Common test utilities and helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory for running the binary
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file relative to the context root and return its full path
    pub fn with_file(&self, rel: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// The binary, run from the context root with user config and
    /// `EVIDENCE_VAULT_*` variables isolated from the host
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("evidence-vault").unwrap();
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("EVIDENCE_VAULT_LOG_LEVEL")
            .env_remove("EVIDENCE_VAULT_DATA_FILE")
            .env_remove("EVIDENCE_VAULT_DUE_SOON_DAYS")
            .env_remove("EVIDENCE_VAULT_FORMAT")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A small YAML seed with one contract and one request for it
pub const CONTRACT_SEED_YAML: &str = r#"
evidence:
  - id: ev-100
    name: Data Processing Agreement
    docType: Contract
    status: Pending Review
    expiryDate: 2027-06-30
    lastUpdated: 2025-05-05
    versions:
      - id: v2
        version: 2
        uploadedAt: 2025-05-05
        uploader: Legal Team
        notes: Counter-signed
        fileSize: 140 KB
        fileName: dpa_v2.pdf
      - id: v1
        version: 1
        uploadedAt: 2025-04-01
        uploader: Legal Team
        notes: First draft
        fileSize: 120 KB
        fileName: dpa_v1.pdf
requests:
  - id: req-100
    docType: Contract
    dueDate: 2026-03-01
    status: Pending
    buyerName: Northwind Traders
"#;
