//! Display labels shared by every status and document-type enum
//!
//! Each enum serializes as its human label (`"Audit Report"`, `"In Progress"`)
//! and parses back from that label case-insensitively. Hyphens and
//! underscores parse as spaces so `audit-report` works on the command line.

use crate::error::{ErrorCode, VaultError};

/// A closed enum with a fixed human-readable label per variant
pub trait Labeled: Sized + Copy + 'static {
    /// Every variant, in presentation order
    const ALL: &'static [Self];

    /// What the parse error calls this kind of value
    const KIND: &'static str;

    fn label(&self) -> &'static str;
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}

/// Parse a label into its variant
pub fn parse_label<T: Labeled>(raw: &str) -> Result<T, VaultError> {
    let wanted = normalize(raw);
    T::ALL
        .iter()
        .copied()
        .find(|variant| normalize(variant.label()) == wanted)
        .ok_or_else(|| {
            let expected: Vec<&str> = T::ALL.iter().map(|v| v.label()).collect();
            VaultError::parse_with_code(
                ErrorCode::PARSE_UNKNOWN_LABEL,
                format!(
                    "Unknown {} '{}' (expected one of: {})",
                    T::KIND,
                    raw,
                    expected.join(", ")
                ),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocStatus, DocType, RequestStatus};

    #[test]
    fn test_parse_exact_label() {
        assert_eq!(
            parse_label::<DocType>("Audit Report").unwrap(),
            DocType::AuditReport
        );
    }

    #[test]
    fn test_parse_is_case_insensitive_and_accepts_kebab_case() {
        assert_eq!(
            parse_label::<DocStatus>("expiring-soon").unwrap(),
            DocStatus::ExpiringSoon
        );
        assert_eq!(
            parse_label::<RequestStatus>("IN_PROGRESS").unwrap(),
            RequestStatus::InProgress
        );
        assert_eq!(
            parse_label::<DocType>("  insurance ").unwrap(),
            DocType::Insurance
        );
    }

    #[test]
    fn test_unknown_label_lists_expected_values() {
        let err = parse_label::<DocType>("Invoice").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown document type 'Invoice'"));
        assert!(message.contains("Certificate, Audit Report, Policy"));
        assert_eq!(err.code(), ErrorCode::PARSE_UNKNOWN_LABEL);
    }
}
