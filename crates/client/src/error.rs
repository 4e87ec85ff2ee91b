//! Error taxonomy for the REST client layer.

use marquee_core::CoreError;
use serde::Deserialize;

/// Errors surfaced by the typed service wrappers.
///
/// Save failures never corrupt the in-memory draft: every API takes the
/// draft by reference, so on any variant here the caller's draft is
/// intact and the operation can be retried.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    /// Transient; the operator retries manually — there is no automatic
    /// retry or backoff.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("API error ({status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// No usable auth context; protected calls fail closed.
    #[error("Not authenticated: {0}")]
    Unauthenticated(String),

    /// A save for this editor surface is already in flight; the trigger
    /// stays disabled until it settles.
    #[error("A save is already in flight")]
    SaveInFlight,
}

/// Convenience alias for client call results.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Whether the operator should be offered a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Api { status, .. } => {
                *status == 408 || *status == 429 || *status >= 500
            }
            _ => false,
        }
    }
}

/// Standard backend error body: `{ "error": "...", "code": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    code: Option<String>,
}

/// Classify a non-2xx response into [`ClientError::Api`].
///
/// Unparseable bodies fall back to the raw text so the operator always
/// sees something human-readable.
pub(crate) fn classify_response(status: u16, body: &str) -> ClientError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = match parsed {
        Some(ErrorBody { error, code }) => (
            code.unwrap_or_else(|| "UNKNOWN".to_string()),
            error.unwrap_or_else(|| body.to_string()),
        ),
        None => (
            "UNKNOWN".to_string(),
            if body.is_empty() {
                format!("HTTP {status}")
            } else {
                body.to_string()
            },
        ),
    };
    ClientError::Api {
        status,
        code,
        message,
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
