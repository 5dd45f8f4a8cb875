//! # Session Token Storage
//!
//! The session token is the only persisted client state and the only
//! cross-request shared mutable resource. Rather than reading ambient
//! storage, the HTTP client takes a [`TokenStore`] at construction, so the
//! 401-recovery path is independently testable with a fake store.
//!
//! Lifecycle: written on successful login, read before every request,
//! cleared on detected auth failure or explicit logout. Writes originate
//! only from user-triggered serialized actions, so last-writer-wins is
//! acceptable.

use std::fs;
use std::path::PathBuf;

use parking_lot::RwLock;

/// Fixed storage key under which the token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

/// Credential provider injected into the API client.
pub trait TokenStore: Send + Sync {
    /// Current session token, if a session exists.
    fn get(&self) -> Option<String>;
    /// Store a new session token (login, refresh).
    fn set(&self, token: &str);
    /// Forget the session token (logout, terminal auth failure).
    fn clear(&self);
}

/// In-memory store; the default for tests and embedded use.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded store, convenient in tests.
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    fn set(&self, token: &str) {
        *self.token.write() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write() = None;
    }
}

/// File-backed store persisting the token across client restarts.
///
/// The token lives in a file named [`TOKEN_STORAGE_KEY`] inside the given
/// directory. Write failures are logged and otherwise ignored: losing
/// persistence degrades to a per-session token, it must not fail the login
/// that produced it.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(TOKEN_STORAGE_KEY),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(_) => None,
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = fs::write(&self.path, token) {
            tracing::warn!(error = %e, path = %self.path.display(), "Failed to persist session token");
        }
    }

    fn clear(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %e, path = %self.path.display(), "Failed to remove session token");
            }
        }
    }
}
