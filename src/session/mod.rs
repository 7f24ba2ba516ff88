pub mod file;
pub mod memory;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::types::user::{AuthResponse, User};

use self::memory::MemoryStore;

pub const TOKEN_KEY: &str = "vle_token";
pub const USER_KEY: &str = "vle_user";

/// String key-value storage backing a [`Session`].
///
/// Every operation touches exactly one entry.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// The local login state: the bearer token under [`TOKEN_KEY`] and a cached
/// copy of the user record under [`USER_KEY`].
///
/// Cloning a session shares the underlying store, so a token evicted through
/// one clone is gone for all of them.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// The current token. A store that cannot be read counts as holding no
    /// token, so the request simply goes out unauthenticated.
    pub fn token(&self) -> Option<String> {
        match self.store.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(err) => {
                warn!("Read session token failed, treat as logged out: {err:#}");
                None
            }
        }
    }

    /// The cached user record. Not validated against the server, use
    /// `/auth/me` for that.
    pub fn user(&self) -> Option<User> {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("Read cached user failed: {err:#}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("Cached user record is invalid, ignore it: {err}");
                None
            }
        }
    }

    /// Logged in means both the token and the user record are present.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }

    pub fn save(&self, auth: &AuthResponse) -> Result<()> {
        let user = serde_json::to_string(&auth.user).context("encode user record")?;
        self.store
            .set(TOKEN_KEY, &auth.token)
            .context("save session token")?;
        if let Err(err) = self.store.set(USER_KEY, &user) {
            // Never leave a token behind without its user record.
            if let Err(rollback) = self.store.remove(TOKEN_KEY) {
                warn!("Rollback session token failed: {rollback:#}");
            }
            return Err(err).context("save user record");
        }
        debug!("Session saved for user '{}'", auth.user.email);
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(TOKEN_KEY).context("remove session token")?;
        self.store.remove(USER_KEY).context("remove user record")?;
        Ok(())
    }

    /// Drops the token only, the cached user record stays readable.
    pub fn evict_token(&self) {
        match self.store.remove(TOKEN_KEY) {
            Ok(()) => info!("Session token evicted"),
            Err(err) => warn!("Evict session token failed: {err:#}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthResponse {
        AuthResponse {
            token: String::from("t-123"),
            user: User::new("Alex", "alex@example.com"),
        }
    }

    #[test]
    fn test_save_and_clear() {
        let session = Session::in_memory();
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);

        session.save(&auth()).unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("t-123"));
        assert_eq!(session.user().unwrap().name, "Alex");

        session.clear().unwrap();
        assert!(!session.is_logged_in());
        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_evict_token_keeps_user() {
        let session = Session::in_memory();
        session.save(&auth()).unwrap();

        session.evict_token();
        assert_eq!(session.token(), None);
        assert!(session.user().is_some());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.save(&auth()).unwrap();
        other.evict_token();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = Arc::new(MemoryStore::new());
        store.set(TOKEN_KEY, "").unwrap();
        let session = Session::new(store);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_invalid_cached_user() {
        let store = Arc::new(MemoryStore::new());
        store.set(TOKEN_KEY, "t").unwrap();
        store.set(USER_KEY, "{not json").unwrap();
        let session = Session::new(store);
        assert!(session.user().is_none());
        assert!(!session.is_logged_in());
    }
}
