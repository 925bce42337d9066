use std::path::PathBuf;
use thiserror::Error;

pub mod codes;

pub use codes::{describe_error_code, ErrorCode};

/// The unified error type for Evidence Vault
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] Seed data error: {message}")]
    Data {
        code: u16,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("[E{code:04}] {kind} '{id}' not found")]
    NotFound {
        code: u16,
        kind: &'static str,
        id: String,
    },

    #[error("[E{code:04}] Parse error: {message}")]
    Parse { code: u16, message: String },

    #[error("[E{code:04}] Validation error: {message}")]
    Validation {
        code: u16,
        message: String,
        field: Option<String>,
    },
}

impl VaultError {
    /// Create a configuration error with specific code and path
    pub fn config_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    /// Create a seed data error with specific code and path
    pub fn data_with_code(code: u16, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Data {
            code,
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn evidence_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            code: ErrorCode::NOT_FOUND_EVIDENCE,
            kind: "Evidence",
            id: id.into(),
        }
    }

    pub fn request_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            code: ErrorCode::NOT_FOUND_REQUEST,
            kind: "Request",
            id: id.into(),
        }
    }

    /// Create a parse error with specific code
    pub fn parse_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Parse {
            code,
            message: message.into(),
        }
    }

    /// Create a validation error for a required field that was left blank
    pub fn required_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_REQUIRED_FIELD,
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a validation error not tied to a single form field
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::VALIDATION_GENERIC,
            message: message.into(),
            field: None,
        }
    }

    /// Add a source error to this error
    ///
    /// Only configuration and seed data errors carry a source; other variants
    /// are returned unchanged.
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        match &mut self {
            Self::Config { source: src, .. } | Self::Data { source: src, .. } => {
                *src = Some(source.into());
            }
            Self::NotFound { .. } | Self::Parse { .. } | Self::Validation { .. } => {}
        }
        self
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::Data { .. } => 3,
            Self::NotFound { .. } => 4,
            Self::Parse { .. } => 5,
            Self::Validation { .. } => 8,
        }
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::Config { code, .. }
            | Self::Data { code, .. }
            | Self::NotFound { code, .. }
            | Self::Parse { code, .. }
            | Self::Validation { code, .. } => *code,
        }
    }

    /// The form field a validation error refers to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message, path, .. } => match path {
                Some(p) => format!("Configuration problem in {}: {}", p.display(), message),
                None => format!("Configuration problem: {}", message),
            },
            Self::Data { message, path, .. } => match path {
                Some(p) => format!("Seed data problem in {}: {}", p.display(), message),
                None => format!("Seed data problem: {}", message),
            },
            Self::NotFound { kind, id, .. } => format!("{} '{}' not found", kind, id),
            Self::Parse { message, .. } => message.clone(),
            Self::Validation { message, .. } => message.clone(),
        }
    }
}

/// Type alias for Results using VaultError
pub type Result<T> = std::result::Result<T, VaultError>;
