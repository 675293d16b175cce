//! Typed error enum for the API client.

use hostelvoice_core::ApiResponse;
use thiserror::Error;

use crate::session::SessionStoreError;

/// Failure envelope kept for caller inspection. Error responses carry
/// arbitrary `data`, so it stays untyped.
pub type RawEnvelope = ApiResponse<serde_json::Value>;

/// Errors from API operations.
///
/// The client never retries and never swallows: every failure surfaces as one
/// of these. `Display` is the human-readable message a page or CLI would show.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, TLS, interrupted body).
    /// Passed through unmodified from the HTTP stack.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Any endpoint answered 401. The session has already been cleared and
    /// the expiry hook fired by the time this is returned.
    #[error("{message}")]
    Unauthorized { message: String, envelope: Box<RawEnvelope> },
    /// Non-success HTTP status, or a 2xx whose envelope says `success: false`.
    #[error("{message}")]
    Status { status: u16, message: String, envelope: Box<RawEnvelope> },
    /// The body was not a well-formed envelope, or `data` did not match the
    /// expected record shape.
    #[error("malformed response in {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    /// The caller's cancellation token fired while the request was in flight.
    #[error("request cancelled")]
    Cancelled,
    /// The injected session store failed to produce a token.
    #[error(transparent)]
    Session(#[from] SessionStoreError),
    /// The HTTP client could not be built (TLS backend failure).
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ApiError {
    /// HTTP status code, where one applies.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The raw failure envelope, when the backend produced one.
    #[must_use]
    pub fn envelope(&self) -> Option<&RawEnvelope> {
        match self {
            Self::Unauthorized { envelope, .. } | Self::Status { envelope, .. } => Some(envelope),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
