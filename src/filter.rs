//! Evidence library filtering
//!
//! Criteria combine with logical AND and the output keeps the input order.
//! The expiry bucket is matched against the stored status, not against
//! `expiry_date`; an `expired` bucket is the same test as `status = Expired`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Result, VaultError};
use crate::model::{DocStatus, DocType, Evidence};

/// Expiry bucket offered next to the status filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpiryBucket {
    Expired,
    ExpiringSoon,
}

impl ExpiryBucket {
    /// The document status this bucket selects
    pub fn status(&self) -> DocStatus {
        match self {
            Self::Expired => DocStatus::Expired,
            Self::ExpiringSoon => DocStatus::ExpiringSoon,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expired => "expired",
            Self::ExpiringSoon => "expiring-soon",
        }
    }
}

impl fmt::Display for ExpiryBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpiryBucket {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expired" => Ok(Self::Expired),
            "expiring-soon" | "expiring_soon" | "expiring soon" => Ok(Self::ExpiringSoon),
            other => Err(VaultError::parse_with_code(
                crate::error::ErrorCode::PARSE_UNKNOWN_LABEL,
                format!(
                    "Unknown expiry bucket '{}' (expected one of: expired, expiring-soon)",
                    other
                ),
            )),
        }
    }
}

/// Filter criteria for the evidence library; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceFilter {
    pub doc_type: Option<DocType>,
    pub status: Option<DocStatus>,
    pub expiry: Option<ExpiryBucket>,
    pub search: Option<String>,
}

/// Result of applying a filter
#[derive(Debug, PartialEq)]
pub enum FilterOutcome<'a> {
    Matched(Vec<&'a Evidence>),
    /// Nothing matched; callers show an empty-state message
    NoItems,
}

impl<'a> FilterOutcome<'a> {
    pub fn items(&self) -> &[&'a Evidence] {
        match self {
            Self::Matched(items) => items,
            Self::NoItems => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoItems)
    }
}

/// Treat `all` and blank values as an absent criterion
fn param_value(raw: &str) -> Option<&str> {
    let value = raw.trim();
    (!value.is_empty() && !value.eq_ignore_ascii_case("all")).then_some(value)
}

impl EvidenceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    pub fn with_status(mut self, status: DocStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_expiry(mut self, expiry: ExpiryBucket) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Set the search term; a blank term clears it
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        self.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self
    }

    /// Build criteria from query-style parameters (`docType`, `status`, `expiry`, `search`)
    ///
    /// `all` or an empty value leaves a criterion unset. An unrecognised
    /// `expiry` value is ignored; unrecognised `docType` and `status` values
    /// are parse errors.
    pub fn from_params<'p>(params: impl IntoIterator<Item = (&'p str, &'p str)>) -> Result<Self> {
        let mut filter = Self::new();
        for (key, value) in params {
            let Some(value) = param_value(value) else {
                continue;
            };
            match key {
                "docType" => filter.doc_type = Some(value.parse()?),
                "status" => filter.status = Some(value.parse()?),
                "expiry" => match value.parse() {
                    Ok(bucket) => filter.expiry = Some(bucket),
                    Err(_) => debug!("Ignoring unknown expiry bucket '{}'", value),
                },
                "search" => filter.search = Some(value.to_string()),
                other => debug!("Ignoring unknown filter parameter '{}'", other),
            }
        }
        Ok(filter)
    }

    pub fn has_filters(&self) -> bool {
        self.doc_type.is_some()
            || self.status.is_some()
            || self.expiry.is_some()
            || self.search.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, evidence: &Evidence) -> bool {
        if let Some(doc_type) = self.doc_type {
            if evidence.doc_type != doc_type {
                return false;
            }
        }

        if let Some(status) = self.status {
            if evidence.status != status {
                return false;
            }
        }

        if let Some(expiry) = self.expiry {
            if evidence.status != expiry.status() {
                return false;
            }
        }

        if let Some(ref search) = self.search {
            if !matches_search(evidence, search) {
                return false;
            }
        }

        true
    }

    /// Select the matching records, keeping their original order
    pub fn apply<'a>(&self, evidence: &'a [Evidence]) -> FilterOutcome<'a> {
        let matched: Vec<&Evidence> = evidence.iter().filter(|e| self.matches(e)).collect();
        debug!(
            "Evidence filter {:?} matched {} of {} records",
            self,
            matched.len(),
            evidence.len()
        );

        if matched.is_empty() {
            FilterOutcome::NoItems
        } else {
            FilterOutcome::Matched(matched)
        }
    }
}

/// Case-insensitive substring match against the name or the document-type label
pub fn matches_search(evidence: &Evidence, term: &str) -> bool {
    let term = term.to_lowercase();
    evidence.name.to_lowercase().contains(&term)
        || evidence.doc_type.to_string().to_lowercase().contains(&term)
}
