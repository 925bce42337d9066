//! # Evidence Vault
//!
//! Track compliance documents with their version history and fulfill buyer
//! document requests from them.
//!
//! ## Usage
//!
//! ```bash
//! evidence-vault list [--doc-type TYPE] [--status STATUS] [--expiry BUCKET] [--search TEXT]
//! evidence-vault fulfill req-003 --evidence ev-005
//! ```
//!
//! ## Modules
//!
//! - `model` - Evidence, version and request records
//! - `vault` - The seeded in-memory record set
//! - `filter` - Evidence library filtering
//! - `fulfillment` - Satisfying a request with existing or newly declared evidence
//! - `requests` - Request queue: tabs, counts, due-date hints
//! - `versions` - Simulated version uploads
//! - `presentation` - Status-to-style lookup
//! - `config` - Layered configuration
//! - `error` - Error type and codes
//! - `cli` - Command-line front end
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod fulfillment;
pub mod model;
pub mod presentation;
pub mod requests;
pub mod vault;
pub mod versions;

pub use error::{Result, VaultError};
pub use filter::{EvidenceFilter, ExpiryBucket, FilterOutcome};
pub use fulfillment::{candidate_evidence, fulfill, Fulfillment, FulfillmentSelection};
pub use model::{DocStatus, DocType, Evidence, EvidenceVersion, Request, RequestStatus};
pub use requests::{RequestQueue, RequestTab};
pub use vault::Vault;
