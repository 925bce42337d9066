//! Output formatting for the command-line views
//!
//! Every function here is pure and returns the text to print, so the views
//! can be tested without capturing stdout.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::filter::FilterOutcome;
use crate::fulfillment::Fulfillment;
use crate::model::{Evidence, Request};
use crate::presentation::{style, AnyStatus};
use crate::requests::{fulfilled_evidence, DueIndicator, RequestQueue, RequestTab};

/// Placeholder for an absent date
pub const NO_DATE: &str = "—";

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| NO_DATE.to_string())
}

/// Status label padded to `width`, colored when `color` is set
pub fn status_chip(status: impl Into<AnyStatus>, width: usize, color: bool) -> String {
    let style = style(status);
    let padded = format!("{:<width$}", style.label, width = width);
    if color {
        style.tone.paint(&padded)
    } else {
        padded
    }
}

/// Serialize `value` for the machine-readable formats
pub fn to_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Human => anyhow::bail!("human output has no structured form"),
    })
}

pub fn render_evidence_list(outcome: &FilterOutcome<'_>, color: bool) -> String {
    let items = match outcome {
        FilterOutcome::NoItems => return "No items found\n".to_string(),
        FilterOutcome::Matched(items) => items,
    };

    let name_width = items
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("DOC NAME".len());

    let mut output = format!(
        "{:<8} {:<name_width$} {:<13} {:<15} {:<13} {:>8}  {}\n",
        "ID",
        "DOC NAME",
        "DOC TYPE",
        "STATUS",
        "EXPIRY",
        "VERSIONS",
        "LAST UPDATED",
        name_width = name_width
    );

    for evidence in items {
        output.push_str(&format!(
            "{:<8} {:<name_width$} {:<13} {} {:<13} {:>8}  {}\n",
            evidence.id,
            evidence.name,
            evidence.doc_type.to_string(),
            status_chip(evidence.status, 15, color),
            format_optional_date(evidence.expiry_date),
            format!("v{}", evidence.version_count()),
            format_date(evidence.last_updated),
            name_width = name_width
        ));
    }

    output.push_str(&format!(
        "\n{} item{}\n",
        items.len(),
        if items.len() == 1 { "" } else { "s" }
    ));
    output
}

pub fn render_evidence_detail(evidence: &Evidence, color: bool) -> String {
    let mut output = format!(
        "{} ({})\n{}\n",
        evidence.name,
        evidence.id,
        "=".repeat(evidence.name.chars().count() + evidence.id.len() + 3)
    );

    if let Some(description) = &evidence.description {
        output.push_str(description);
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format!("Doc Type:      {}\n", evidence.doc_type));
    output.push_str(&format!(
        "Status:        {}\n",
        status_chip(evidence.status, 0, color)
    ));
    output.push_str(&format!(
        "Expiry Date:   {}\n",
        format_optional_date(evidence.expiry_date)
    ));
    output.push_str(&format!(
        "Last Updated:  {}\n",
        format_date(evidence.last_updated)
    ));
    if let Some(current) = evidence.latest_version() {
        output.push_str(&format!("Current Version: v{}\n", current.version));
    }
    output.push_str(&format!(
        "Total Versions: {}\n",
        evidence.version_count()
    ));

    output.push_str("\nVersion History\n---------------\n");
    for (index, version) in evidence.versions.iter().enumerate() {
        let marker = if index == 0 { " (current)" } else { "" };
        output.push_str(&format!(
            "v{}{}  {}  {}  {} ({})\n    {}\n",
            version.version,
            marker,
            format_date(version.uploaded_at),
            version.uploader,
            version.file_name,
            version.file_size,
            version.notes
        ));
    }

    output
}

/// Tab bar with per-tab counts, e.g. `All (6) | Pending (3) | ...`
pub fn render_tab_bar(queue: &RequestQueue, active: RequestTab) -> String {
    let counts = queue.status_counts();
    RequestTab::all_tabs()
        .iter()
        .map(|tab| {
            let entry = format!("{} ({})", tab, counts.for_tab(*tab));
            if *tab == active {
                format!("[{}]", entry)
            } else {
                entry
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

fn render_request_card(
    request: &Request,
    evidence: &[Evidence],
    today: NaiveDate,
    due_soon_days: u32,
    color: bool,
) -> String {
    let mut card = format!(
        "{}  {}  {}\n",
        request.id,
        request.doc_type,
        status_chip(request.status, 0, color)
    );

    let due_hint = DueIndicator::for_dates(request.due_date, today, due_soon_days)
        .map(|hint| format!(" {}", hint))
        .unwrap_or_default();
    card.push_str(&format!(
        "    {}  Due {}{}\n",
        request.buyer_name,
        format_date(request.due_date),
        due_hint
    ));

    if let Some(notes) = &request.notes {
        card.push_str(&format!("    {}\n", notes));
    }

    if request.is_fulfilled() {
        if let Some(doc) = fulfilled_evidence(request, evidence) {
            card.push_str(&format!("    Fulfilled with: {}\n", doc.name));
        }
    }

    card
}

pub fn render_requests(
    queue: &RequestQueue,
    tab: RequestTab,
    evidence: &[Evidence],
    today: NaiveDate,
    due_soon_days: u32,
    color: bool,
) -> String {
    let mut output = render_tab_bar(queue, tab);
    output.push_str("\n\n");

    let requests = queue.by_tab(tab);
    if requests.is_empty() {
        output.push_str("No requests found\n");
        return output;
    }

    let cards: Vec<String> = requests
        .iter()
        .map(|r| render_request_card(r, evidence, today, due_soon_days, color))
        .collect();
    output.push_str(&cards.join("\n"));
    output
}

pub fn render_candidates(request: &Request, candidates: &[&Evidence]) -> String {
    let mut output = format!(
        "Provide {} evidence for {}\n\n",
        request.doc_type, request.buyer_name
    );

    if candidates.is_empty() {
        output.push_str("No matching evidence found in vault\n");
        return output;
    }

    for evidence in candidates {
        output.push_str(&format!(
            "{}  {}  v{}  Updated {}\n",
            evidence.id,
            evidence.name,
            evidence.version_count(),
            evidence.last_updated.format("%b %-d")
        ));
    }
    output
}

pub fn render_fulfillment(result: &Fulfillment, evidence: &[Evidence], color: bool) -> String {
    let request = &result.request;
    let mut output = format!("{}\n\n", result.acknowledgement());
    output.push_str(&format!(
        "{}  {}  {}\n",
        request.id,
        request.doc_type,
        status_chip(request.status, 0, color)
    ));

    match (&result.declared, fulfilled_evidence(request, evidence)) {
        (Some(declared), _) => {
            output.push_str(&format!("    Declared new evidence: {}\n", declared.name));
        }
        (None, Some(doc)) => {
            output.push_str(&format!("    Fulfilled with: {}\n", doc.name));
        }
        (None, None) => {}
    }
    output
}
