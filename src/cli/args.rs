//! CLI argument structures
//!
//! This module defines the command-line interface of evidence-vault: the
//! global flags and one subcommand per view or action.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Track compliance evidence and fulfill buyer document requests
#[derive(Parser, Debug)]
#[command(name = "evidence-vault")]
#[command(about = "evidence-vault - Track compliance evidence and fulfill buyer document requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed file (JSON or YAML) replacing the built-in dataset
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List evidence documents, optionally filtered
    List {
        /// Document type (e.g. "Certificate", "audit-report"), or "all"
        #[arg(long, value_name = "TYPE")]
        doc_type: Option<String>,

        /// Document status (e.g. "Valid", "pending-review"), or "all"
        #[arg(long)]
        status: Option<String>,

        /// Expiry bucket: expired or expiring-soon
        #[arg(long, value_name = "BUCKET")]
        expiry: Option<String>,

        /// Case-insensitive text matched against name and document type
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one evidence document with its version history
    Show {
        /// Evidence id (e.g. ev-001)
        id: String,
    },

    /// Show the buyer request queue
    Requests {
        /// Tab to show: all, pending, in-progress, overdue, fulfilled
        #[arg(long, default_value = "all")]
        tab: String,

        /// Date used for due-date hints (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<String>,
    },

    /// List evidence that can fulfill a request
    Candidates {
        /// Request id (e.g. req-003)
        request_id: String,
    },

    /// Mark a request as fulfilled
    Fulfill {
        /// Request id (e.g. req-003)
        request_id: String,

        /// Fulfill with this existing evidence id
        #[arg(long, conflicts_with = "new_name", required_unless_present = "new_name")]
        evidence: Option<String>,

        /// Fulfill by declaring a new evidence document with this name
        #[arg(long, value_name = "NAME")]
        new_name: Option<String>,

        /// Notes for the new evidence document
        #[arg(long, requires = "new_name")]
        notes: Option<String>,
    },

    /// Upload a new version of an evidence document (simulated)
    Upload {
        /// Evidence id (e.g. ev-001)
        evidence_id: String,

        /// What changed in this version (required)
        #[arg(long, default_value = "")]
        notes: String,

        /// New expiry date
        #[arg(long, value_name = "YYYY-MM-DD")]
        expiry: Option<String>,

        /// File name of the uploaded document
        #[arg(long, value_name = "NAME")]
        file: Option<String>,
    },
}
