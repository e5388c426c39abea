// ── Core error types ──
//
// User-facing errors from leadwire-core. Consumers never see raw HTTP
// status codes or JSON parse failures directly -- the
// `From<leadwire_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach gateway at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    // ── Data errors ──────────────────────────────────────────────────
    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    // ── Operation errors ─────────────────────────────────────────────
    /// Client-side validation failure. No network call was made.
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// The backend answered but declined the operation
    /// (`success: false` in an acknowledgement).
    #[error("Operation rejected by backend: {message}")]
    Rejected { message: String },

    // ── Gateway errors (wrapped, not exposed raw) ────────────────────
    #[error("Gateway error: {message}")]
    Gateway {
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

// ── Conversion from gateway-layer errors ─────────────────────────────

impl From<leadwire_api::Error> for CoreError {
    fn from(err: leadwire_api::Error) -> Self {
        match err {
            leadwire_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| u.to_string())
                            .unwrap_or_else(|| "<unknown>".into()),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Gateway {
                        message: e.to_string(),
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            leadwire_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            leadwire_api::Error::Http { status: 404, message } => CoreError::NotFound {
                entity: "resource".into(),
                identifier: message,
            },
            leadwire_api::Error::Http { status, message } => CoreError::Gateway {
                message,
                status: Some(status),
            },
            leadwire_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}
