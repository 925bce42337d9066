//! Integration tests for the CLI interface
//!
//! Runs the binary against the built-in dataset and against seed and config
//! files written into a temporary directory.

mod common;

use common::{TestContext, CONTRACT_SEED_YAML};
use predicates::prelude::*;

#[test]
fn test_cli_help_default() {
    let ctx = TestContext::new();
    ctx.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn test_invalid_command() {
    let ctx = TestContext::new();
    ctx.cmd()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_list_shows_every_document() {
    let ctx = TestContext::new();
    ctx.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ISO 9001:2015 Certificate"))
        .stdout(predicate::str::contains("Workers Compensation Policy"))
        .stdout(predicate::str::contains("8 items"));
}

#[test]
fn test_list_by_doc_type() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["list", "--doc-type", "insurance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("General Liability Insurance"))
        .stdout(predicate::str::contains("Workers Compensation Policy"))
        .stdout(predicate::str::contains("ISO 9001").not())
        .stdout(predicate::str::contains("2 items"));
}

#[test]
fn test_list_all_means_no_filter() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["list", "--doc-type", "all", "--status", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 items"));
}

#[test]
fn test_list_with_no_matches() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["list", "--doc-type", "Contract", "--status", "Valid"])
        .assert()
        .success()
        .stdout(predicate::eq("No items found\n"));
}

#[test]
fn test_list_by_expiry_bucket() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["list", "--expiry", "expiring-soon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Environmental Policy Statement"))
        .stdout(predicate::str::contains("1 item\n"));
}

#[test]
fn test_list_search_and_status_json() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args([
            "list",
            "--search",
            "ISO",
            "--status",
            "valid",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ev-001", "ev-007"]);
}

#[test]
fn test_list_rejects_unknown_doc_type() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["list", "--doc-type", "Invoice"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unknown document type 'Invoice'"));
}

#[test]
fn test_show_evidence_detail() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["show", "ev-006"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Supplier Agreement - Acme Corp (ev-006)"))
        .stdout(predicate::str::contains("Current Version: v3"))
        .stdout(predicate::str::contains("Total Versions: 3"))
        .stdout(predicate::str::contains("v3 (current)"))
        .stdout(predicate::str::contains("Amendment for pricing update"));
}

#[test]
fn test_show_unknown_evidence() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["show", "ev-999"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Evidence 'ev-999' not found"));
}

#[test]
fn test_requests_tab_with_counts() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["requests", "--tab", "overdue", "--today", "2026-01-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All (6) | Pending (3) | In Progress (1) | [Overdue (1)] | Fulfilled (1)",
        ))
        .stdout(predicate::str::contains("req-003"))
        .stdout(predicate::str::contains("(2 days overdue)"))
        .stdout(predicate::str::contains("req-001").not());
}

#[test]
fn test_requests_rejects_unknown_tab() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["requests", "--tab", "archived"])
        .assert()
        .code(5);
}

#[test]
fn test_candidates_for_insurance_request() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["candidates", "req-003"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Provide Insurance evidence for SafeSource Ltd.",
        ))
        .stdout(predicate::str::contains("General Liability Insurance"))
        .stdout(predicate::str::contains("Workers Compensation Policy"))
        .stdout(predicate::str::contains("ISO").not());
}

#[test]
fn test_fulfill_with_existing_evidence() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["fulfill", "req-003", "--evidence", "ev-005"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fulfilled with existing evidence request successfully!",
        ))
        .stdout(predicate::str::contains("req-003  Insurance  Fulfilled"))
        .stdout(predicate::str::contains(
            "Fulfilled with: General Liability Insurance",
        ));
}

#[test]
fn test_fulfill_json_output() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args(["fulfill", "req-003", "--evidence", "ev-005", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["request"]["status"], "Fulfilled");
    assert_eq!(value["request"]["fulfilledWith"], "ev-005");
    assert!(value.get("declared").is_none());
}

#[test]
fn test_fulfill_with_new_evidence() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args([
            "fulfill",
            "req-004",
            "--new-name",
            "Environmental Policy 2026",
            "--notes",
            "Board approved",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["request"]["status"], "Fulfilled");
    assert!(value["request"].get("fulfilledWith").is_none());
    assert_eq!(value["declared"]["name"], "Environmental Policy 2026");
    assert_eq!(value["declared"]["docType"], "Policy");
}

#[test]
fn test_fulfill_rejects_blank_name() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["fulfill", "req-001", "--new-name", "   "])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Document name is required"));
}

#[test]
fn test_fulfill_unknown_request() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["fulfill", "req-404", "--evidence", "ev-001"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Request 'req-404' not found"));
}

#[test]
fn test_fulfill_needs_a_selection() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["fulfill", "req-001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--evidence"));
}

#[test]
fn test_upload_requires_notes() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["upload", "ev-001"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Notes are required"));
}

#[test]
fn test_upload_acknowledges() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args([
            "upload",
            "ev-004",
            "--notes",
            "Renewed for 2026",
            "--expiry",
            "2026-12-31",
        ])
        .assert()
        .success()
        .stdout(predicate::eq(
            "New version uploaded!\nNotes: Renewed for 2026\nExpiry: 2026-12-31\n",
        ));
}

#[test]
fn test_seed_file_replaces_builtin_data() {
    let ctx = TestContext::new();
    let seed = ctx.with_file("seed.yaml", CONTRACT_SEED_YAML);

    ctx.cmd()
        .args(["--data"])
        .arg(&seed)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data Processing Agreement"))
        .stdout(predicate::str::contains("ISO 9001").not())
        .stdout(predicate::str::contains("1 item\n"));
}

#[test]
fn test_malformed_seed_file() {
    let ctx = TestContext::new();
    let seed = ctx.with_file("seed.json", "{ \"evidence\": [ {");

    ctx.cmd()
        .arg("--data")
        .arg(&seed)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid JSON syntax"));
}

#[test]
fn test_project_config_sets_due_window() {
    let ctx = TestContext::new();
    ctx.with_file(".evidence-vault/config.toml", "due_soon_days = 1\n");

    // req-001 is due Jan 15: three days out, beyond a one day window
    ctx.cmd()
        .args(["requests", "--tab", "pending", "--today", "2026-01-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Due Jan 15, 2026\n"));
}

#[test]
fn test_project_config_sets_format() {
    let ctx = TestContext::new();
    ctx.with_file(".evidence-vault/config.toml", "format = \"json\"\n");

    let output = ctx.cmd().args(["show", "ev-002"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["docType"], "Audit Report");
}

#[test]
fn test_env_overrides_config_file() {
    let ctx = TestContext::new();
    ctx.with_file(".evidence-vault/config.toml", "format = \"json\"\n");

    ctx.cmd()
        .env("EVIDENCE_VAULT_FORMAT", "yaml")
        .args(["show", "ev-002"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docType: Audit Report"));
}

#[test]
fn test_invalid_config_file() {
    let ctx = TestContext::new();
    let config = ctx.with_file("vault.toml", "log_level = \"loud\"\n");

    ctx.cmd()
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid log level 'loud'"));
}

#[test]
fn test_upload_rejects_malformed_expiry() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["upload", "ev-001", "--notes", "x", "--expiry", "2026-13-01"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid date '2026-13-01'"));
}

#[test]
fn test_requests_rejects_malformed_today() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["requests", "--today", "tomorrow"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("--today"));
}

#[test]
fn test_missing_config_names_the_file_once() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["--config", "missing.toml", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"))
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("Fatal error").not());
}

#[test]
fn test_verbose_error_shows_code() {
    let ctx = TestContext::new();
    ctx.cmd()
        .args(["-v", "show", "ev-999"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("[E3001] Evidence not found"));
}

#[test]
fn test_fulfill_trims_evidence_id() {
    let ctx = TestContext::new();
    let output = ctx
        .cmd()
        .args(["fulfill", "req-003", "--evidence", " ev-005 ", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["request"]["fulfilledWith"], "ev-005");
}
