//! Durable access-token storage
//!
//! The console's login flow stores one bearer token; the API client reads it
//! back on every request through the [`TokenProvider`] seam. Reading happens at
//! call time, so a login or logout between two requests changes the second
//! request only, never one already in flight.
//!
//! An absent token is a normal state (logged out), not an error: providers
//! return `None` and the request goes out unauthenticated.

use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default token file location, next to the console's other local state.
pub const DEFAULT_TOKEN_PATH: &str = "./data/token";

/// Source of the bearer token attached to outgoing requests.
///
/// Implementations must be cheap to call: the client consults the provider
/// once per request.
pub trait TokenProvider: Send + Sync {
    /// The currently stored token, or `None` when logged out.
    fn token(&self) -> Option<String>;
}

// ============================================================================
// File-Backed Store
// ============================================================================

/// Token storage backed by a single file on disk.
///
/// This is the durable analog of the browser console's `token` storage key:
/// the login flow writes it via [`store`](Self::store), logout removes it via
/// [`clear`](Self::clear), and the API client only ever reads it.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a token, creating parent directories as needed.
    pub fn store(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, token)?;
        info!(path = %self.path.display(), "Access token stored");
        Ok(())
    }

    /// Remove the stored token. Removing an already-absent token is fine.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Access token cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_PATH)
    }
}

impl TokenProvider for FileTokenStore {
    /// Read the token file fresh. A missing file is the logged-out state; an
    /// unreadable file is logged and treated the same, never surfaced as a
    /// request failure.
    fn token(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Token file unreadable, proceeding unauthenticated");
                None
            }
        }
    }
}

// ============================================================================
// Fixed Providers
// ============================================================================

/// Fixed token, for tests and service-to-service tooling.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Provider that never yields a token; every request goes out unauthenticated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl TokenProvider for Anonymous {
    fn token(&self) -> Option<String> {
        None
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in_tempdir() -> (tempfile::TempDir, FileTokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        (dir, store)
    }

    #[test]
    fn test_store_then_read_roundtrip() {
        let (_dir, store) = store_in_tempdir();
        store.store("tok-abc123").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-abc123"));
    }

    #[test]
    fn test_missing_file_is_logged_out() {
        let (_dir, store) = store_in_tempdir();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_read_trims_surrounding_whitespace() {
        let (_dir, store) = store_in_tempdir();
        std::fs::write(store.path(), "  tok-xyz\n").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-xyz"));
    }

    #[test]
    fn test_whitespace_only_file_is_logged_out() {
        let (_dir, store) = store_in_tempdir();
        std::fs::write(store.path(), "\n  \n").unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_clear_removes_token_and_is_idempotent() {
        let (_dir, store) = store_in_tempdir();
        store.store("tok-1").unwrap();
        store.clear().unwrap();
        assert_eq!(store.token(), None);
        // Clearing again must not fail
        store.clear().unwrap();
    }

    #[test]
    fn test_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("state/auth/token"));
        store.store("tok-nested").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-nested"));
    }

    #[test]
    fn test_token_is_read_at_call_time() {
        let (_dir, store) = store_in_tempdir();
        assert_eq!(store.token(), None);
        // An external login writes the file; the same provider must pick it up
        std::fs::write(store.path(), "tok-fresh").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-fresh"));
    }

    #[test]
    fn test_static_token_always_present() {
        let provider = StaticToken::new("fixed");
        assert_eq!(provider.token().as_deref(), Some("fixed"));
    }

    #[test]
    fn test_anonymous_never_has_a_token() {
        assert_eq!(Anonymous.token(), None);
    }
}
