//! Evidence documents and their version history

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::labels::{parse_label, Labeled};
use crate::error::VaultError;

/// Kind of compliance document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocType {
    Certificate,
    #[serde(rename = "Audit Report")]
    AuditReport,
    Policy,
    License,
    Insurance,
    Contract,
}

impl Labeled for DocType {
    const ALL: &'static [Self] = &[
        Self::Certificate,
        Self::AuditReport,
        Self::Policy,
        Self::License,
        Self::Insurance,
        Self::Contract,
    ];
    const KIND: &'static str = "document type";

    fn label(&self) -> &'static str {
        match self {
            Self::Certificate => "Certificate",
            Self::AuditReport => "Audit Report",
            Self::Policy => "Policy",
            Self::License => "License",
            Self::Insurance => "Insurance",
            Self::Contract => "Contract",
        }
    }
}

/// Review state of an evidence document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocStatus {
    Valid,
    Expired,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    #[serde(rename = "Pending Review")]
    PendingReview,
    Draft,
}

impl Labeled for DocStatus {
    const ALL: &'static [Self] = &[
        Self::Valid,
        Self::Expired,
        Self::ExpiringSoon,
        Self::PendingReview,
        Self::Draft,
    ];
    const KIND: &'static str = "document status";

    fn label(&self) -> &'static str {
        match self {
            Self::Valid => "Valid",
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring Soon",
            Self::PendingReview => "Pending Review",
            Self::Draft => "Draft",
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DocStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DocType {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

impl FromStr for DocStatus {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

/// One uploaded revision of an evidence document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceVersion {
    pub id: String,
    pub version: u32,
    pub uploaded_at: NaiveDate,
    pub uploader: String,
    pub notes: String,
    /// Display string such as "2.4 MB", not a byte count
    pub file_size: String,
    pub file_name: String,
}

/// A compliance document tracked with its version history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub id: String,
    pub name: String,
    pub doc_type: DocType,
    pub status: DocStatus,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    pub last_updated: NaiveDate,
    /// Newest first by convention
    pub versions: Vec<EvidenceVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Evidence {
    /// The first entry of the history, which is the newest by convention
    pub fn latest_version(&self) -> Option<&EvidenceVersion> {
        self.versions.first()
    }

    /// Number of stored revisions, shown as "vN" in listings
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }
}
