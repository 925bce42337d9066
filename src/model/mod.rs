//! Record model for evidence documents and buyer requests
//!
//! Records serialize in camelCase with enums written as their display
//! labels, so seed files stay readable by hand.

pub mod evidence;
pub mod labels;
pub mod request;

pub use evidence::{DocStatus, DocType, Evidence, EvidenceVersion};
pub use labels::{parse_label, Labeled};
pub use request::{Request, RequestStatus};
