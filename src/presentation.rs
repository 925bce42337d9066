//! Status-to-style lookup shared by both views

use serde::Serialize;
use std::fmt;

use crate::model::{DocStatus, Labeled, RequestStatus};

/// Color family used to render a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Emerald,
    Red,
    Amber,
    Blue,
    Slate,
}

impl Tone {
    /// ANSI SGR foreground code closest to the color family
    pub fn ansi_code(&self) -> u8 {
        match self {
            Self::Emerald => 32,
            Self::Red => 31,
            Self::Amber => 33,
            Self::Blue => 34,
            Self::Slate => 90,
        }
    }

    pub fn paint(&self, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.ansi_code(), text)
    }
}

/// Any status shown as a chip: document statuses and request statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyStatus {
    Doc(DocStatus),
    Request(RequestStatus),
}

impl From<DocStatus> for AnyStatus {
    fn from(status: DocStatus) -> Self {
        Self::Doc(status)
    }
}

impl From<RequestStatus> for AnyStatus {
    fn from(status: RequestStatus) -> Self {
        Self::Request(status)
    }
}

impl AnyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Doc(s) => s.label(),
            Self::Request(s) => s.label(),
        }
    }
}

impl fmt::Display for AnyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusStyle {
    pub tone: Tone,
    pub label: &'static str,
}

pub fn style(status: impl Into<AnyStatus>) -> StatusStyle {
    let status = status.into();
    let tone = match status {
        AnyStatus::Doc(DocStatus::Valid) | AnyStatus::Request(RequestStatus::Fulfilled) => {
            Tone::Emerald
        }
        AnyStatus::Doc(DocStatus::Expired) | AnyStatus::Request(RequestStatus::Overdue) => {
            Tone::Red
        }
        AnyStatus::Doc(DocStatus::ExpiringSoon) | AnyStatus::Request(RequestStatus::InProgress) => {
            Tone::Amber
        }
        AnyStatus::Doc(DocStatus::PendingReview) | AnyStatus::Request(RequestStatus::Pending) => {
            Tone::Blue
        }
        AnyStatus::Doc(DocStatus::Draft) => Tone::Slate,
    };

    StatusStyle {
        tone,
        label: status.label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tones() {
        let cases: [(AnyStatus, Tone); 9] = [
            (DocStatus::Valid.into(), Tone::Emerald),
            (RequestStatus::Fulfilled.into(), Tone::Emerald),
            (DocStatus::Expired.into(), Tone::Red),
            (RequestStatus::Overdue.into(), Tone::Red),
            (DocStatus::ExpiringSoon.into(), Tone::Amber),
            (RequestStatus::InProgress.into(), Tone::Amber),
            (DocStatus::PendingReview.into(), Tone::Blue),
            (RequestStatus::Pending.into(), Tone::Blue),
            (DocStatus::Draft.into(), Tone::Slate),
        ];

        for (status, tone) in cases {
            assert_eq!(style(status).tone, tone, "{}", status);
        }
    }

    #[test]
    fn test_label_is_status_text() {
        assert_eq!(style(DocStatus::ExpiringSoon).label, "Expiring Soon");
        assert_eq!(style(RequestStatus::InProgress).label, "In Progress");
    }

    #[test]
    fn test_paint_wraps_in_ansi_codes() {
        assert_eq!(Tone::Red.paint("Expired"), "\x1b[31mExpired\x1b[0m");
    }
}
