//! # Persisted user snapshot
//!
//! [`UserProfile`] is the client-side projection of the authenticated user:
//! the email and display name returned by the auth endpoints. It is written
//! to browser storage next to the session credential on login/registration
//! and read back on startup to hydrate the auth context, so the header and
//! settings views can render without waiting on the network.
//!
//! The snapshot is advisory display data only. Reachability of protected
//! views is decided from credential presence, never from this struct.

use serde::{Deserialize, Serialize};

/// User information persisted alongside the session credential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: Option<String>,
}

impl UserProfile {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}
