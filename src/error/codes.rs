/// Error code registry for Evidence Vault
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 2000-2999: Seed data errors
/// - 3000-3999: Lookup errors
/// - 4000-4999: Parse errors
/// - 7000-7999: Validation errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_PARSE_ERROR: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1003;

    // Seed data errors (2000-2999)
    pub const DATA_READ_FAILED: u16 = 2001;
    pub const DATA_INVALID_JSON: u16 = 2002;
    pub const DATA_INVALID_YAML: u16 = 2003;

    // Lookup errors (3000-3999)
    pub const NOT_FOUND_EVIDENCE: u16 = 3001;
    pub const NOT_FOUND_REQUEST: u16 = 3002;

    // Parse errors (4000-4999)
    pub const PARSE_UNKNOWN_LABEL: u16 = 4001;
    pub const PARSE_INVALID_DATE: u16 = 4002;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_REQUIRED_FIELD: u16 = 7001;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Failed to parse configuration",
        1003 => "Invalid value in configuration",

        2001 => "Failed to read seed data file",
        2002 => "Invalid JSON syntax in seed data",
        2003 => "Invalid YAML syntax in seed data",

        3001 => "Evidence not found",
        3002 => "Request not found",

        4001 => "Unknown label",
        4002 => "Invalid date",

        7000 => "Invalid input",
        7001 => "Required field is missing",

        _ => "Unknown error code",
    }
}
