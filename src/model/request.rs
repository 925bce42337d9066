//! Buyer document requests

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::evidence::DocType;
use super::labels::{parse_label, Labeled};
use crate::error::VaultError;

/// Where a request stands in the fulfillment queue
///
/// The only transition is any non-terminal state to `Fulfilled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Overdue,
    Fulfilled,
}

impl RequestStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Fulfilled)
    }
}

impl Labeled for RequestStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::InProgress,
        Self::Overdue,
        Self::Fulfilled,
    ];
    const KIND: &'static str = "request status";

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Overdue => "Overdue",
            Self::Fulfilled => "Fulfilled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RequestStatus {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s)
    }
}

/// A buyer's ask for a document of a given type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    pub id: String,
    pub doc_type: DocType,
    pub due_date: NaiveDate,
    pub status: RequestStatus,
    pub buyer_name: String,
    /// Evidence id; only set when fulfilled with an existing document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfilled_with: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Request {
    pub fn is_fulfilled(&self) -> bool {
        self.status.is_terminal()
    }
}
