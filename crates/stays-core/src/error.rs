// ── Core error types ──
//
// User-facing errors from stays-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<stays_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.
//
// Validation errors are always raised before a mutating request is
// issued, so a failed operation leaves local and remote state untouched.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Validation ───────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Booking {identifier} is already cancelled")]
    AlreadyCancelled { identifier: String },

    // ── Session errors ───────────────────────────────────────────────
    #[error("Not authenticated -- login required")]
    NotAuthenticated,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Hotel not found: {identifier}")]
    HotelNotFound { identifier: String },

    #[error("Booking not found: {identifier}")]
    BookingNotFound { identifier: String },

    #[error("Entity not found: {entity_type} with id {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    // ── Backend errors (wrapped, not exposed raw) ────────────────────
    #[error("Could not reach the booking service at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Service request failed: {message}")]
    Backend {
        message: String,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<stays_api::Error> for CoreError {
    fn from(err: stays_api::Error) -> Self {
        match err {
            stays_api::Error::NotAuthenticated => CoreError::NotAuthenticated,
            stays_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout { timeout_secs: 0 }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else if e.status().map(|s| s.as_u16()) == Some(404) {
                    CoreError::NotFound {
                        entity_type: "resource".into(),
                        identifier: e.url().map(|u| u.path().to_string()).unwrap_or_default(),
                    }
                } else {
                    CoreError::Backend {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            stays_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            stays_api::Error::Timeout { timeout_secs } => CoreError::Timeout { timeout_secs },
            stays_api::Error::Api { message, status: 404 } => CoreError::NotFound {
                entity_type: "resource".into(),
                identifier: message,
            },
            stays_api::Error::Api { message, status } => CoreError::Backend {
                message,
                status: Some(status),
            },
            stays_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
