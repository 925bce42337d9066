//! Command-line entry points
//!
//! Resolves configuration and seed data, then dispatches each subcommand to
//! the library operations and prints the rendered result.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::IsTerminal;
use tracing::{debug, warn};

pub mod args;
pub mod render;

pub use args::{Cli, Commands};

use crate::config::{ConfigLoader, OutputFormat, VaultConfig};
use crate::error::{ErrorCode, VaultError};
use crate::filter::EvidenceFilter;
use crate::fulfillment::{candidate_evidence, FulfillmentSelection};
use crate::requests::{RequestQueue, RequestTab};
use crate::vault::Vault;
use crate::versions::{upload_version, UploadVersionForm};

/// Everything a command needs: settings plus the seeded records
pub struct App {
    pub config: VaultConfig,
    pub vault: Vault,
    pub queue: RequestQueue,
    pub format: OutputFormat,
    pub color: bool,
}

/// Resolve configuration layers, letting CLI flags win
pub fn resolve_config(cli: &Cli) -> Result<VaultConfig> {
    let mut config = ConfigLoader::new()
        .with_explicit(cli.config.clone())
        .load()?;

    if let Some(path) = &cli.data {
        config.data_file = Some(path.clone());
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    Ok(config)
}

impl App {
    pub fn new(config: VaultConfig) -> Result<Self> {
        let vault = Vault::from_source(config.data_file.as_deref())?;
        let queue = RequestQueue::new(vault.requests.clone());
        let format = config.format;
        let color = format == OutputFormat::Human
            && std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none();

        Ok(Self {
            config,
            vault,
            queue,
            format,
            color,
        })
    }

    /// Print `value` structured, or `human` for the human format
    fn emit<T: serde::Serialize>(&self, value: &T, human: impl FnOnce() -> String) -> Result<()> {
        match self.format {
            OutputFormat::Human => print!("{}", human()),
            format => println!("{}", render::to_structured(value, format)?),
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Commands) -> Result<()> {
        debug!("Executing {:?}", command);
        match command {
            Commands::List {
                doc_type,
                status,
                expiry,
                search,
            } => self.list(doc_type, status, expiry, search),
            Commands::Show { id } => self.show(&id),
            Commands::Requests { tab, today } => {
                let today = match today {
                    Some(raw) => parse_date("today", &raw)?,
                    None => Local::now().date_naive(),
                };
                self.requests(&tab, today)
            }
            Commands::Candidates { request_id } => self.candidates(&request_id),
            Commands::Fulfill {
                request_id,
                evidence,
                new_name,
                notes,
            } => {
                let selection = match (evidence, new_name) {
                    (Some(id), _) => FulfillmentSelection::existing(id),
                    (None, Some(name)) => FulfillmentSelection::new_evidence(name, notes),
                    (None, None) => FulfillmentSelection::existing(String::new()),
                };
                self.fulfill(&request_id, &selection)
            }
            Commands::Upload {
                evidence_id,
                notes,
                expiry,
                file,
            } => {
                let expiry_date = expiry
                    .map(|raw| parse_date("expiry", &raw))
                    .transpose()?;
                self.upload(
                    &evidence_id,
                    UploadVersionForm {
                        notes,
                        expiry_date,
                        file_name: file,
                    },
                )
            }
        }
    }

    fn list(
        &self,
        doc_type: Option<String>,
        status: Option<String>,
        expiry: Option<String>,
        search: Option<String>,
    ) -> Result<()> {
        let params = [
            ("docType", doc_type),
            ("status", status),
            ("expiry", expiry),
            ("search", search),
        ];
        let filter = EvidenceFilter::from_params(
            params
                .iter()
                .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v))),
        )?;

        let outcome = filter.apply(&self.vault.evidence);
        self.emit(&outcome.items(), || {
            render::render_evidence_list(&outcome, self.color)
        })
    }

    fn show(&self, id: &str) -> Result<()> {
        let evidence = self
            .vault
            .find_evidence(id)
            .ok_or_else(|| VaultError::evidence_not_found(id))?;
        self.emit(evidence, || {
            render::render_evidence_detail(evidence, self.color)
        })
    }

    fn requests(&self, tab: &str, today: NaiveDate) -> Result<()> {
        let tab: RequestTab = tab.parse()?;

        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct RequestsView<'a> {
            counts: crate::requests::StatusCounts,
            requests: Vec<&'a crate::model::Request>,
        }

        let view = RequestsView {
            counts: self.queue.status_counts(),
            requests: self.queue.by_tab(tab),
        };
        self.emit(&view, || {
            render::render_requests(
                &self.queue,
                tab,
                &self.vault.evidence,
                today,
                self.config.due_soon_days,
                self.color,
            )
        })
    }

    fn candidates(&self, request_id: &str) -> Result<()> {
        let request = self
            .queue
            .get(request_id)
            .ok_or_else(|| VaultError::request_not_found(request_id))?;
        let candidates = candidate_evidence(&self.vault.evidence, request);
        self.emit(&candidates, || {
            render::render_candidates(request, &candidates)
        })
    }

    fn fulfill(&mut self, request_id: &str, selection: &FulfillmentSelection) -> Result<()> {
        if let FulfillmentSelection::Existing { evidence_id } = selection {
            match self.vault.find_evidence(evidence_id) {
                None if !evidence_id.trim().is_empty() => {
                    warn!("Evidence {} is not in the vault", evidence_id)
                }
                Some(evidence) => {
                    if let Some(request) = self.queue.get(request_id) {
                        if evidence.doc_type != request.doc_type {
                            warn!(
                                "Evidence {} is a {}, request {} asks for {}",
                                evidence.id, evidence.doc_type, request.id, request.doc_type
                            );
                        }
                    }
                }
                None => {}
            }
        }

        let result = self
            .queue
            .fulfill(request_id, selection)?
            .ok_or_else(|| VaultError::request_not_found(request_id))?;

        self.emit(&result, || {
            render::render_fulfillment(&result, &self.vault.evidence, self.color)
        })
    }

    fn upload(&self, evidence_id: &str, form: UploadVersionForm) -> Result<()> {
        let evidence = self
            .vault
            .find_evidence(evidence_id)
            .ok_or_else(|| VaultError::evidence_not_found(evidence_id))?;
        let receipt = upload_version(evidence, &form)?;
        self.emit(&receipt, || format!("{}\n", receipt.message()))
    }
}

/// Parse a `YYYY-MM-DD` flag value
pub fn parse_date(flag: &str, raw: &str) -> crate::error::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        VaultError::parse_with_code(
            ErrorCode::PARSE_INVALID_DATE,
            format!("Invalid date '{}' for --{} (expected YYYY-MM-DD)", raw, flag),
        )
    })
}

/// Exit code for an error surfaced from a command
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<VaultError>()
        .map(VaultError::exit_code)
        .unwrap_or(1)
}
