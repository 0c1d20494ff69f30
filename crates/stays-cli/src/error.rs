//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and config errors into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use stays_core::CoreError;

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONFLICT: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the booking service at {url}")]
    #[diagnostic(
        code(stays::connection_failed),
        help(
            "Check that the service is running and accessible.\n\
             URL: {url}\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(stays::timeout),
        help("Increase the timeout with --timeout or check service responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Not authenticated")]
    #[diagnostic(
        code(stays::auth),
        help(
            "Log in first: stays login\n\
             Or configure credentials: stays config init"
        )
    )]
    NotAuthenticated,

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(stays::no_credentials),
        help(
            "Configure credentials with: stays config init\n\
             Or set the STAYS_PASSWORD environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(stays::not_found),
        help("Run: stays {list_command} to see what is available")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    #[error("Booking {identifier} is already cancelled")]
    #[diagnostic(code(stays::already_cancelled))]
    AlreadyCancelled { identifier: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(stays::validation))]
    Validation { field: String, reason: String },

    // ── Service ──────────────────────────────────────────────────────
    #[error("Service error: {message}")]
    #[diagnostic(code(stays::service_error))]
    ServiceError {
        message: String,
        status: Option<u16>,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(stays::profile_not_found),
        help("Create one with: stays config init")
    )]
    ProfileNotFound { name: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(stays::no_config),
        help(
            "Create one with: stays config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(stays::config))]
    Config(String),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(stays::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(stays::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotAuthenticated | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::AlreadyCancelled { .. } => exit_code::CONFLICT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::AlreadyCancelled { identifier } => {
                CliError::AlreadyCancelled { identifier }
            }

            CoreError::NotAuthenticated => CliError::NotAuthenticated,

            CoreError::HotelNotFound { identifier } => CliError::NotFound {
                resource_type: "hotel".into(),
                identifier,
                list_command: "search".into(),
            },

            CoreError::BookingNotFound { identifier } => CliError::NotFound {
                resource_type: "booking".into(),
                identifier,
                list_command: "bookings list".into(),
            },

            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                list_command: "search".into(),
                resource_type: entity_type,
                identifier,
            },

            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }

            CoreError::Timeout { timeout_secs } => CliError::Timeout {
                seconds: timeout_secs,
            },

            CoreError::Backend { message, status } => {
                CliError::ServiceError { message, status }
            }

            CoreError::Config { message } => CliError::Config(message),

            CoreError::Internal(message) => CliError::ServiceError {
                message,
                status: None,
            },
        }
    }
}

impl From<stays_config::ConfigError> for CliError {
    fn from(err: stays_config::ConfigError) -> Self {
        match err {
            stays_config::ConfigError::NoCredentials { profile } => {
                CliError::NoCredentials { profile }
            }
            stays_config::ConfigError::UnknownProfile(name) => {
                CliError::ProfileNotFound { name }
            }
            stays_config::ConfigError::Validation { field, reason } => {
                CliError::Validation { field, reason }
            }
            other => CliError::Config(other.to_string()),
        }
    }
}
