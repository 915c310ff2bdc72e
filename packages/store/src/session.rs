//! # Session persistence
//!
//! The session is two values in browser storage: an opaque bearer token
//! under [`TOKEN_KEY`] and a JSON-serialized [`UserProfile`] snapshot under
//! [`PROFILE_KEY`]. [`SessionStore`] abstracts the storage backend so the
//! same [`Session`] wrapper runs against localStorage in the browser
//! ([`crate::LocalStore`]) and an in-memory map in native builds and tests
//! ([`crate::MemoryStore`]).
//!
//! [`Session`] is the only writer of these keys. Every auth mutation
//! (login, registration, logout, server-signaled invalidation) goes through
//! it, which keeps credential presence and the profile snapshot in step.

use crate::models::UserProfile;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "neowatch_token";
/// Storage key for the persisted user snapshot.
pub const PROFILE_KEY: &str = "neowatch_profile";

/// A string key/value store backing the session.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The session credential and user snapshot, backed by a [`SessionStore`].
#[derive(Clone, Debug, Default)]
pub struct Session<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Whether a credential is present. Protected routes are reachable
    /// exactly when this is true.
    pub fn authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    /// The persisted user snapshot. A snapshot that no longer parses is
    /// treated as absent.
    pub fn profile(&self) -> Option<UserProfile> {
        let raw = self.store.get(PROFILE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_profile(&self, profile: &UserProfile) {
        if let Ok(raw) = serde_json::to_string(profile) {
            self.store.set(PROFILE_KEY, &raw);
        }
    }

    /// Destroy the session: token and snapshot both removed.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(PROFILE_KEY);
    }
}
