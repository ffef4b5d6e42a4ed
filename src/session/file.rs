//! File-backed session store
//!
//! Persists the same `token` / `userId` pair the browser keeps in local
//! storage, as a small JSON object. The file is re-read on every access so
//! separate CLI invocations observe each other's writes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{Session, SessionStore, SessionStoreError, TOKEN_KEY, USER_ID_KEY};

/// Session store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_items(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Failed to read session file");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = ?self.path, error = %e, "Ignoring unreadable session file");
            BTreeMap::new()
        })
    }

    fn write_items(&self, items: &BTreeMap<String, String>) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(items)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        let mut items = self.read_items();
        Session::from_entries(items.remove(TOKEN_KEY), items.remove(USER_ID_KEY))
    }

    fn token(&self) -> Option<String> {
        self.read_items().remove(TOKEN_KEY)
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut items = self.read_items();
        items.insert(TOKEN_KEY.to_string(), session.access_token.clone());
        items.insert(USER_ID_KEY.to_string(), session.user_id.clone());
        self.write_items(&items)?;
        tracing::debug!(path = ?self.path, "Session written");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut items = self.read_items();
        items.remove(TOKEN_KEY);
        items.remove(USER_ID_KEY);

        if items.is_empty() {
            match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        } else {
            self.write_items(&items)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert!(store.get().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_set_creates_parent_dirs_and_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let store = FileSessionStore::new(&path);

        store.set(&Session::new("t1", "u1")).unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.get(), Some(Session::new("t1", "u1")));

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"token": "t1", "userId": "u1"}));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);

        store.set(&Session::new("t", "u")).unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert!(store.get().is_none());
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert!(store.get().is_none());

        store.set(&Session::new("t", "u")).unwrap();
        assert_eq!(store.token().as_deref(), Some("t"));
    }
}
