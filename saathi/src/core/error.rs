//! # Common Error Types
//!
//! Consolidated error handling for the FasalSaathi client.
//!
//! ## Error Categories
//!
//! - **Transport**: No response reached the client (connection refused,
//!   timeout, DNS failure). Carries the transport error message — there is
//!   no backend `detail` to extract in this case.
//! - **Http**: The backend answered with a non-success status other than a
//!   recoverable 401. `detail` is taken from the FastAPI error body when
//!   present, else derived from the status. The error is logged once at the
//!   client and then propagated untouched; callers own user-facing
//!   messaging.
//! - **AuthExpired**: A 401 that could not be recovered by the single
//!   refresh-and-retry cycle. By the time callers see this, the stored
//!   token has been cleared and the session observer notified.
//! - **Decode**: The response body did not parse as the expected DTO.
//!
//! ## Propagation Policy
//!
//! The client never swallows an error: every failure is logged via
//! `tracing` and returned to the caller. No retries happen beyond the
//! single 401-driven reattempt.

use thiserror::Error;

/// Client-wide error type covering every failure mode of an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received from the backend.
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend rejected the request with an HTTP error status.
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    /// Authentication could not be recovered; the session is over.
    #[error("Session expired: login required")]
    AuthExpired,

    /// The response body was not the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status associated with this error, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::AuthExpired => Some(401),
            _ => None,
        }
    }

    /// Normalized human-readable detail: the backend `detail` string when
    /// one was extracted, else the underlying error message.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Http { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    /// True when the failure was a terminal authentication failure.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        let err = ApiError::Http { status: 404, detail: "Crop not found".into() };
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(ApiError::AuthExpired.status_code(), Some(401));
        assert_eq!(ApiError::Transport("connection refused".into()).status_code(), None);
    }

    #[test]
    fn test_detail_prefers_backend_message() {
        let err = ApiError::Http { status: 404, detail: "Crop not found".into() };
        assert_eq!(err.detail(), "Crop not found");

        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.detail(), "Network error: connection refused");
    }
}
