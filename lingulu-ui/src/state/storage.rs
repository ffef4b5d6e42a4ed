//! Browser session store
//!
//! Keeps the session under the same `token` / `userId` keys the backend's
//! other clients use, in `window.localStorage`.

use lingulu::session::{Session, SessionStore, SessionStoreError, TOKEN_KEY, USER_ID_KEY};
use web_sys::Storage;

/// [`SessionStore`] over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

impl LocalStorageSessionStore {
    fn storage() -> Result<Storage, SessionStoreError> {
        web_sys::window()
            .ok_or_else(|| SessionStoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(|e| SessionStoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| SessionStoreError::Unavailable("localStorage disabled".to_string()))
    }

    fn item(key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn get(&self) -> Option<Session> {
        Session::from_entries(Self::item(TOKEN_KEY), Self::item(USER_ID_KEY))
    }

    fn token(&self) -> Option<String> {
        Self::item(TOKEN_KEY)
    }

    fn set(&self, session: &Session) -> Result<(), SessionStoreError> {
        let storage = Self::storage()?;
        storage
            .set_item(TOKEN_KEY, &session.access_token)
            .and_then(|_| storage.set_item(USER_ID_KEY, &session.user_id))
            .map_err(|e| SessionStoreError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let storage = Self::storage()?;
        storage
            .remove_item(TOKEN_KEY)
            .and_then(|_| storage.remove_item(USER_ID_KEY))
            .map_err(|e| SessionStoreError::Unavailable(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_set_get_clear() {
        let store = LocalStorageSessionStore;
        store.clear().unwrap();
        assert!(!store.has_session());

        store.set(&Session::new("tok", "7")).unwrap();
        assert_eq!(store.get(), Some(Session::new("tok", "7")));
        assert_eq!(store.token().as_deref(), Some("tok"));

        store.clear().unwrap();
        assert!(store.get().is_none());
    }

    #[wasm_bindgen_test]
    fn test_new_session_replaces_old() {
        let store = LocalStorageSessionStore;
        store.set(&Session::new("first", "1")).unwrap();
        store.set(&Session::new("second", "2")).unwrap();
        assert_eq!(store.get(), Some(Session::new("second", "2")));
        store.clear().unwrap();
    }
}
