//! Authentication context and hooks for the UI.

use api::UserProfile;
use dioxus::prelude::*;

/// Authentication state for the application.
///
/// `authenticated` reflects credential presence in the session store,
/// which alone decides reachability of protected views. `user` is the
/// persisted display snapshot and may lag behind the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub authenticated: bool,
}

impl AuthState {
    /// Hydrate from the persisted session. Browser storage is synchronous,
    /// so there is no loading phase.
    pub fn load() -> Self {
        let client = api::make_client();
        Self {
            user: client.session().profile(),
            authenticated: client.session().authenticated(),
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns authentication state.
/// Wrap the app with this component; mutations go through [`apply_login`]
/// and [`sign_out`] so the context and the persisted session stay in step.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::load);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Record a successful login or registration. The client has already
/// persisted the credential and snapshot; this updates the live context.
pub fn apply_login(auth: &mut Signal<AuthState>, user: &UserProfile) {
    auth.set(AuthState {
        user: Some(user.clone()),
        authenticated: true,
    });
}

/// Destroy the session and return to the public entry path.
pub fn sign_out(auth: &mut Signal<AuthState>) {
    api::make_client().logout();
    auth.set(AuthState::default());
}
