use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use crate::session::Session;

    #[test]
    fn test_token_round_trip() {
        let session = Session::new(MemoryStore::new());

        // Initially absent
        assert!(session.token().is_none());
        assert!(!session.authenticated());

        session.set_token("abc123");
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert!(session.authenticated());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = Session::new(MemoryStore::new());

        session.set_token("");
        assert!(session.token().is_none());
        assert!(!session.authenticated());
    }

    #[test]
    fn test_profile_round_trip() {
        let session = Session::new(MemoryStore::new());
        assert!(session.profile().is_none());

        let profile = UserProfile {
            email: "nurse@ward.example".to_string(),
            name: Some("Alex".to_string()),
        };
        session.set_profile(&profile);

        let loaded = session.profile().unwrap();
        assert_eq!(loaded, profile);
        assert_eq!(loaded.display_name(), "Alex");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = UserProfile {
            email: "nurse@ward.example".to_string(),
            name: None,
        };
        assert_eq!(profile.display_name(), "nurse@ward.example");
    }

    #[test]
    fn test_broken_snapshot_is_absent() {
        let store = MemoryStore::new();
        store.set(crate::session::PROFILE_KEY, "{not json");

        let session = Session::new(store);
        assert!(session.profile().is_none());
    }

    #[test]
    fn test_clear_removes_both() {
        let session = Session::new(MemoryStore::new());
        session.set_token("abc123");
        session.set_profile(&UserProfile {
            email: "nurse@ward.example".to_string(),
            name: None,
        });

        session.clear();

        assert!(session.token().is_none());
        assert!(session.profile().is_none());
        assert!(!session.authenticated());
    }
}
