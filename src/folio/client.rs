//! Client-side session guard for the admin shell.
//!
//! Mirrors what the browser does with local storage: keep the token from the
//! last login and gate navigation to the admin area on its mere presence.
//! The guard never checks the signature or expiry. With a stale token the
//! admin shell still renders and the first protected write then fails with
//! 401, which is the actual security boundary (the bearer middleware), not
//! this check.

use std::{fs, io, path::PathBuf};

/// Where the admin client keeps the session token between runs.
pub trait TokenStore {
    fn load(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the token cannot be persisted.
    fn save(&self, token: &str) -> io::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the stored token cannot be removed; a token that
    /// was never stored is not an error.
    fn clear(&self) -> io::Result<()>;
}

/// File-backed store, one token per file.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> io::Result<()> {
        fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// Navigation target for the admin area.
#[derive(Debug, PartialEq, Eq)]
pub enum AdminRoute {
    Admin,
    Login,
}

/// Presence-only check: any stored token routes to the admin shell.
pub fn route_for<S: TokenStore>(store: &S) -> AdminRoute {
    if store.load().is_some() {
        AdminRoute::Admin
    } else {
        AdminRoute::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::new(dir.path().join("admin-token"))
    }

    #[test]
    fn test_no_token_routes_to_login() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(route_for(&store(&dir)), AdminRoute::Login);
    }

    #[test]
    fn test_any_token_routes_to_admin() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        // presence only: even garbage passes the guard, the middleware is
        // what rejects it on the next write
        store.save("not-even-a-jwt").unwrap();

        assert_eq!(route_for(&store), AdminRoute::Admin);
    }

    #[test]
    fn test_clear_routes_back_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store.save("token").unwrap();
        store.clear().unwrap();

        assert_eq!(route_for(&store), AdminRoute::Login);
    }

    #[test]
    fn test_clear_without_token_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(&dir).clear().is_ok());
    }

    #[test]
    fn test_blank_file_counts_as_no_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);

        store.save("  \n").unwrap();

        assert_eq!(route_for(&store), AdminRoute::Login);
    }
}
