//! Public entry view: sign in / sign up card.

use dioxus::prelude::*;

use ui::{Button, ButtonVariant, Input};

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AuthMode {
    Login,
    Signup,
}

/// Auth entry page, toggling between the two modes.
#[component]
pub fn AuthEntry() -> Element {
    let mut auth = ui::use_auth();
    let nav = use_navigator();

    let mut mode = use_signal(|| AuthMode::Login);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let toggle_mode = move |_| {
        mode.set(match mode() {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        });
        error.set(None);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            let n = name().trim().to_string();

            if mode() == AuthMode::Signup {
                if n.is_empty() {
                    error.set(Some("Name is required".to_string()));
                    return;
                }
                if e.is_empty() || !e.contains('@') {
                    error.set(Some("Please enter a valid email".to_string()));
                    return;
                }
                if p.len() < 8 {
                    error.set(Some("Password must be at least 8 characters".to_string()));
                    return;
                }
            }

            loading.set(true);
            let client = api::make_client();
            let result = match mode() {
                AuthMode::Login => client.login(&e, &p).await,
                AuthMode::Signup => client.register(&e, &p, &n).await,
            };

            match result {
                Ok(response) => {
                    ui::apply_login(&mut auth, &response.user);
                    password.set(String::new());
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.message().to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",

                h1 {
                    class: "auth-title",
                    if mode() == AuthMode::Login { "Welcome Back" } else { "Create Account" }
                }
                p {
                    class: "auth-subtitle",
                    if mode() == AuthMode::Login {
                        "Sign in to continue your journey"
                    } else {
                        "Start your caring journey today"
                    }
                }

                form {
                    onsubmit: handle_submit,
                    class: "auth-form",

                    if let Some(err) = error() {
                        div { class: "auth-error", "{err}" }
                    }

                    if mode() == AuthMode::Signup {
                        Input {
                            r#type: "text",
                            placeholder: "Full Name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }

                    Input {
                        r#type: "email",
                        placeholder: "Email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Input {
                        r#type: "password",
                        placeholder: "Password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() {
                            "Please wait..."
                        } else if mode() == AuthMode::Login {
                            "Sign In"
                        } else {
                            "Sign Up"
                        }
                    }
                }

                p {
                    class: "auth-toggle",
                    if mode() == AuthMode::Login {
                        "Don't have an account?"
                    } else {
                        "Already have an account?"
                    }
                    button {
                        class: "auth-toggle-link",
                        onclick: toggle_mode,
                        if mode() == AuthMode::Login { "Sign up" } else { "Sign in" }
                    }
                }
            }
        }
    }
}
