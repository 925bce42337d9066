//! Buyer request queue
//!
//! Owns the mutable request list. The only mutation is the fulfillment
//! transition; `Overdue` comes from the seed data and is never derived from
//! the due date.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{Result, VaultError};
use crate::fulfillment::{self, Fulfillment, FulfillmentSelection};
use crate::model::{Evidence, Request, RequestStatus};

/// Requests due within this many days get a "days left" hint
pub const DEFAULT_DUE_SOON_DAYS: u32 = 7;

/// Tab selection in the request view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestTab {
    #[default]
    All,
    Status(RequestStatus),
}

impl RequestTab {
    /// Tabs in display order
    pub fn all_tabs() -> [RequestTab; 5] {
        [
            Self::All,
            Self::Status(RequestStatus::Pending),
            Self::Status(RequestStatus::InProgress),
            Self::Status(RequestStatus::Overdue),
            Self::Status(RequestStatus::Fulfilled),
        ]
    }

    pub fn includes(&self, request: &Request) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => request.status == *status,
        }
    }
}

impl fmt::Display for RequestTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Status(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for RequestTab {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Status)
        }
    }
}

/// Number of requests per tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub all: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub fulfilled: usize,
}

impl StatusCounts {
    pub fn for_tab(&self, tab: RequestTab) -> usize {
        match tab {
            RequestTab::All => self.all,
            RequestTab::Status(RequestStatus::Pending) => self.pending,
            RequestTab::Status(RequestStatus::InProgress) => self.in_progress,
            RequestTab::Status(RequestStatus::Overdue) => self.overdue,
            RequestTab::Status(RequestStatus::Fulfilled) => self.fulfilled,
        }
    }
}

/// Whole days from `today` until `due`; negative once the due date has passed
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Hint shown next to a request's due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueIndicator {
    Overdue { days: i64 },
    DaysLeft { days: i64 },
}

impl DueIndicator {
    /// `None` when the due date is further out than `due_soon_days`
    pub fn for_dates(due: NaiveDate, today: NaiveDate, due_soon_days: u32) -> Option<Self> {
        let days = days_until_due(due, today);
        if days < 0 {
            Some(Self::Overdue { days: -days })
        } else if days <= i64::from(due_soon_days) {
            Some(Self::DaysLeft { days })
        } else {
            None
        }
    }
}

impl fmt::Display for DueIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue { days } => write!(f, "({} days overdue)", days),
            Self::DaysLeft { days } => write!(f, "({} days left)", days),
        }
    }
}

/// Resolve the evidence a request was fulfilled with
///
/// Unset or dangling references resolve to `None`.
pub fn fulfilled_evidence<'a>(request: &Request, evidence: &'a [Evidence]) -> Option<&'a Evidence> {
    let id = request.fulfilled_with.as_deref()?;
    let found = evidence.iter().find(|e| e.id == id);
    if found.is_none() {
        warn!("Request {} references unknown evidence {}", request.id, id);
    }
    found
}

/// The buyer request list and its one mutation
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    requests: Vec<Request>,
}

impl RequestQueue {
    pub fn new(requests: Vec<Request>) -> Self {
        Self { requests }
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn get(&self, id: &str) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Requests shown under `tab`, in queue order
    pub fn by_tab(&self, tab: RequestTab) -> Vec<&Request> {
        self.requests.iter().filter(|r| tab.includes(r)).collect()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.requests
            .iter()
            .fold(
                StatusCounts {
                    all: self.requests.len(),
                    ..StatusCounts::default()
                },
                |mut counts, request| {
                    match request.status {
                        RequestStatus::Pending => counts.pending += 1,
                        RequestStatus::InProgress => counts.in_progress += 1,
                        RequestStatus::Overdue => counts.overdue += 1,
                        RequestStatus::Fulfilled => counts.fulfilled += 1,
                    }
                    counts
                },
            )
    }

    /// Fulfill the request with `request_id` in place
    ///
    /// Validation failures leave the queue untouched. An unknown id is not an
    /// error: nothing changes and `Ok(None)` is returned.
    pub fn fulfill(
        &mut self,
        request_id: &str,
        selection: &FulfillmentSelection,
    ) -> Result<Option<Fulfillment>> {
        selection.validate()?;

        let Some(slot) = self.requests.iter_mut().find(|r| r.id == request_id) else {
            debug!("No request with id {}; nothing to fulfill", request_id);
            return Ok(None);
        };

        let result = fulfillment::fulfill(slot, selection)?;
        *slot = result.request.clone();
        Ok(Some(result))
    }
}
