//! # Client Configuration
//!
//! Resolves the API base URL at startup. The URL comes from the
//! `FASALSAATHI_API_URL` environment variable when set and non-blank,
//! otherwise the fixed local default. A trailing slash is stripped so
//! endpoint paths can always start with `/`.

use std::time::Duration;

/// Environment variable supplying the API base URL.
pub const API_URL_ENV: &str = "FASALSAATHI_API_URL";

/// Fallback when no environment override is present.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Default request timeout. Prevents a hung backend from freezing callers.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var(API_URL_ENV).ok())
    }

    /// Resolve configuration from an explicit override (used by tests and
    /// embedders that do not want ambient environment reads).
    pub fn from_override(url: Option<String>) -> Self {
        Self {
            base_url: resolve_base_url(url),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn resolve_base_url(raw: Option<String>) -> String {
    let trimmed = raw.as_deref().map(str::trim).unwrap_or("");
    if trimmed.is_empty() {
        return DEFAULT_API_URL.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
}
