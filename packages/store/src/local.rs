//! localStorage-backed SessionStore for the browser.

use crate::session::SessionStore;

/// SessionStore over `window.localStorage`.
///
/// Storage can be unavailable (private browsing, disabled by policy); in
/// that case reads answer `None` and writes are dropped, which degrades to
/// an unauthenticated in-memory session for the page lifetime.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
