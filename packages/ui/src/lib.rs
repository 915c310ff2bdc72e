//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{apply_login, sign_out, use_auth, AuthProvider, AuthState};

mod components;
pub use components::{Button, ButtonVariant, FormField, Input, Label, Select};

mod modal;
pub use modal::ModalOverlay;

mod risk;
pub use risk::{risk_class, RiskBadge};

pub const COMPONENTS_CSS: Asset = asset!("/assets/components.css");
