//! Session Persistence
//!
//! The session (access token + user id) is the only state that outlives a
//! page. It is kept behind the [`SessionStore`] trait so flows receive the
//! store they should write to instead of reaching for ambient globals:
//!
//! - [`MemorySessionStore`]: in-process, used by tests and short-lived tools
//! - [`FileSessionStore`]: JSON file on disk, used by the CLI (native only)
//! - the browser client implements the trait over `window.localStorage`
//!
//! All implementations store the same two keys, [`TOKEN_KEY`] and
//! [`USER_ID_KEY`]. A new session always replaces the previous one.

#[cfg(feature = "native")]
mod file;

#[cfg(feature = "native")]
pub use file::FileSessionStore;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

/// Storage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the user id
pub const USER_ID_KEY: &str = "userId";

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            user_id: user_id.into(),
        }
    }

    /// Rebuild a session from raw key-value entries
    pub fn from_entries(token: Option<String>, user_id: Option<String>) -> Option<Self> {
        Some(Self {
            access_token: token?,
            user_id: user_id?,
        })
    }
}

/// Errors raised while writing the session
#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The backing storage refused the write (quota, privacy mode, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for SessionStoreError {
    fn from(err: serde_json::Error) -> Self {
        SessionStoreError::Serialization(err.to_string())
    }
}

/// Persisted session state, injected into every flow that reads or writes it
pub trait SessionStore {
    /// The stored session, when both keys are present
    fn get(&self) -> Option<Session>;

    /// The stored token on its own (the leaderboard only needs this)
    fn token(&self) -> Option<String>;

    /// Replace whatever is stored with `session`
    fn set(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove both keys
    fn clear(&self) -> Result<(), SessionStoreError>;

    fn has_session(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Option<Session> {
        (**self).get()
    }

    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        (**self).set(session)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        (**self).clear()
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn get(&self) -> Option<Session> {
        (**self).get()
    }

    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        (**self).set(session)
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        (**self).clear()
    }
}

/// In-memory key-value store with the same keys as the browser storage
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a session already stored
    pub fn with_session(session: &Session) -> Self {
        let store = Self::new();
        {
            let mut items = store.items();
            items.insert(TOKEN_KEY.to_string(), session.access_token.clone());
            items.insert(USER_ID_KEY.to_string(), session.user_id.clone());
        }
        store
    }

    /// Raw value for a key
    pub fn item(&self, key: &str) -> Option<String> {
        self.items().get(key).cloned()
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn items(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        let items = self.items();
        Session::from_entries(
            items.get(TOKEN_KEY).cloned(),
            items.get(USER_ID_KEY).cloned(),
        )
    }

    fn token(&self) -> Option<String> {
        self.item(TOKEN_KEY)
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut items = self.items();
        items.insert(TOKEN_KEY.to_string(), session.access_token.clone());
        items.insert(USER_ID_KEY.to_string(), session.user_id.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut items = self.items();
        items.remove(TOKEN_KEY);
        items.remove(USER_ID_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.get().is_none());
        assert!(!store.has_session());

        store.set(&Session::new("t1", "u1")).unwrap();
        assert_eq!(store.get(), Some(Session::new("t1", "u1")));
        assert_eq!(store.item(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(store.item(USER_ID_KEY).as_deref(), Some("u1"));
        assert!(store.has_session());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_new_session_replaces_old() {
        let store = MemorySessionStore::with_session(&Session::new("old", "u-old"));
        store.set(&Session::new("new", "u-new")).unwrap();
        assert_eq!(store.get(), Some(Session::new("new", "u-new")));
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let store = MemorySessionStore::with_session(&Session::new("t", "u"));
        store.clear().unwrap();
        assert!(store.get().is_none());
        assert!(store.token().is_none());
        assert!(store.item(USER_ID_KEY).is_none());
    }

    #[test]
    fn test_empty_token_is_not_a_session() {
        let store = MemorySessionStore::with_session(&Session::new("", "u"));
        assert!(!store.has_session());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let json = serde_json::to_value(Session::new("t", "u")).unwrap();
        assert_eq!(json, serde_json::json!({"accessToken": "t", "userId": "u"}));
    }

    #[test]
    fn test_store_through_reference() {
        fn write(store: impl SessionStore) {
            store.set(&Session::new("a", "b")).unwrap();
        }
        let store = MemorySessionStore::new();
        write(&store);
        assert_eq!(store.token().as_deref(), Some("a"));
    }
}
