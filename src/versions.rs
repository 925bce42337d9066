//! Simulated version uploads
//!
//! Nothing is stored: an accepted upload returns a receipt describing the
//! version it would have created and the evidence record stays as it was.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::error::{Result, VaultError};
use crate::model::Evidence;

/// Fields collected for a new version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadVersionForm {
    pub notes: String,
    pub expiry_date: Option<NaiveDate>,
    pub file_name: Option<String>,
}

/// Acknowledgement of a simulated upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub evidence_id: String,
    pub evidence_name: String,
    /// Number the version would receive: latest + 1
    pub next_version: u32,
    pub notes: String,
    pub expiry_date: Option<NaiveDate>,
    pub file_name: Option<String>,
}

impl UploadReceipt {
    pub fn message(&self) -> String {
        let expiry = self
            .expiry_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "Not set".to_string());
        format!(
            "New version uploaded!\nNotes: {}\nExpiry: {}",
            self.notes, expiry
        )
    }
}

pub fn upload_version(evidence: &Evidence, form: &UploadVersionForm) -> Result<UploadReceipt> {
    let notes = form.notes.trim();
    if notes.is_empty() {
        return Err(VaultError::required_field("notes", "Notes are required"));
    }

    let latest = evidence.versions.iter().map(|v| v.version).max().unwrap_or(0);
    let next_version = latest.checked_add(1).ok_or_else(|| {
        VaultError::validation(format!(
            "{} already has the highest version number (v{})",
            evidence.id, latest
        ))
    })?;

    info!(
        "Accepted upload of v{} for {} ({})",
        next_version, evidence.id, evidence.name
    );

    Ok(UploadReceipt {
        evidence_id: evidence.id.clone(),
        evidence_name: evidence.name.clone(),
        next_version,
        notes: notes.to_string(),
        expiry_date: form.expiry_date,
        file_name: form
            .file_name
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string),
    })
}
