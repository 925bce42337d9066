//! Fulfilling buyer requests with evidence
//!
//! A request is satisfied either by pointing it at an existing evidence
//! record or by declaring a new one. A declared document is echoed back in
//! the result but never inserted into the vault, so `fulfilled_with` stays
//! unset for that path.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, VaultError};
use crate::model::{DocType, Evidence, Request, RequestStatus};

/// What the caller picked to satisfy a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FulfillmentSelection {
    Existing {
        evidence_id: String,
    },
    New {
        name: String,
        notes: Option<String>,
    },
}

impl FulfillmentSelection {
    pub fn existing(evidence_id: impl Into<String>) -> Self {
        Self::Existing {
            evidence_id: evidence_id.into().trim().to_string(),
        }
    }

    pub fn new_evidence(name: impl Into<String>, notes: Option<String>) -> Self {
        Self::New {
            name: name.into(),
            notes,
        }
    }

    /// Reject selections whose required field is blank
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Existing { evidence_id } if evidence_id.trim().is_empty() => Err(
                VaultError::required_field("evidence", "Select an evidence document to fulfill with"),
            ),
            Self::New { name, .. } if name.trim().is_empty() => Err(VaultError::required_field(
                "name",
                "Document name is required",
            )),
            _ => Ok(()),
        }
    }
}

/// A new document named during fulfillment; acknowledged, not stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredEvidence {
    pub name: String,
    pub doc_type: DocType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The updated request plus what was used to fulfill it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fulfillment {
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared: Option<DeclaredEvidence>,
}

impl Fulfillment {
    pub fn created_new(&self) -> bool {
        self.declared.is_some()
    }

    /// Confirmation line shown after a successful fulfillment
    pub fn acknowledgement(&self) -> &'static str {
        if self.created_new() {
            "Created new evidence and fulfilled request successfully!"
        } else {
            "Fulfilled with existing evidence request successfully!"
        }
    }
}

/// Evidence offered for a request: same document type, vault order
pub fn candidate_evidence<'a>(evidence: &'a [Evidence], request: &Request) -> Vec<&'a Evidence> {
    evidence
        .iter()
        .filter(|e| e.doc_type == request.doc_type)
        .collect()
}

/// Move a request to `Fulfilled`
///
/// Already-fulfilled requests are accepted and their `fulfilled_with` is
/// overwritten. The evidence id is not checked against the vault.
pub fn fulfill(request: &Request, selection: &FulfillmentSelection) -> Result<Fulfillment> {
    selection.validate()?;

    if request.is_fulfilled() {
        debug!(
            "Request {} is already fulfilled (with {:?}); overwriting",
            request.id, request.fulfilled_with
        );
    }

    let mut updated = request.clone();
    updated.status = RequestStatus::Fulfilled;

    let declared = match selection {
        FulfillmentSelection::Existing { evidence_id } => {
            updated.fulfilled_with = Some(evidence_id.clone());
            None
        }
        FulfillmentSelection::New { name, notes } => {
            updated.fulfilled_with = None;
            Some(DeclaredEvidence {
                name: name.trim().to_string(),
                doc_type: request.doc_type,
                notes: notes.clone().filter(|n| !n.trim().is_empty()),
            })
        }
    };

    info!(
        "Request {} ({}) fulfilled {}",
        updated.id,
        updated.doc_type,
        match &updated.fulfilled_with {
            Some(id) => format!("with {}", id),
            None => "with newly declared evidence".to_string(),
        }
    );

    Ok(Fulfillment {
        request: updated,
        declared,
    })
}
