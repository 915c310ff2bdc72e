//! Account settings: profile card and password change.

use dioxus::prelude::*;

use ui::{Button, ButtonVariant, FormField, Input};

#[component]
pub fn Settings() -> Element {
    let auth = ui::use_auth();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    let mut saving = use_signal(|| false);

    let handle_change_password = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            status.set(None);

            let current = current_password();
            let new = new_password();
            let confirm = confirm_password();

            if current.is_empty() || new.is_empty() || confirm.is_empty() {
                status.set(Some(Err("Please fill all fields".to_string())));
                return;
            }
            if new != confirm {
                status.set(Some(Err("Passwords do not match".to_string())));
                return;
            }
            let Some(user) = auth().user else {
                status.set(Some(Err("User email not found".to_string())));
                return;
            };

            saving.set(true);
            match api::make_client()
                .reset_password(&user.email, &current, &new)
                .await
            {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Password updated successfully".to_string()
                    } else {
                        response.message
                    };
                    status.set(Some(Ok(message)));
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                }
                Err(err) => {
                    status.set(Some(Err(err.message().to_string())));
                }
            }
            saving.set(false);
        });
    };

    let state = auth();
    let profile_name = state
        .user
        .as_ref()
        .and_then(|u| u.name.clone())
        .unwrap_or_default();
    let profile_email = state
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Settings" }

            div {
                class: "settings-card",
                h2 { class: "view-section-title", "Profile Information" }
                div {
                    class: "profile-grid",
                    div {
                        p { class: "view-muted", "Name" }
                        p { class: "profile-value", "{profile_name}" }
                    }
                    div {
                        p { class: "view-muted", "Email" }
                        p { class: "profile-value", "{profile_email}" }
                    }
                }
            }

            div {
                class: "settings-card",
                h2 { class: "view-section-title", "Change Password" }

                form {
                    onsubmit: handle_change_password,
                    class: "settings-form",

                    FormField {
                        label: "Current password".to_string(),
                        Input {
                            r#type: "password",
                            value: current_password(),
                            oninput: move |evt: FormEvent| current_password.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "New password".to_string(),
                        Input {
                            r#type: "password",
                            value: new_password(),
                            oninput: move |evt: FormEvent| new_password.set(evt.value()),
                        }
                    }
                    FormField {
                        label: "Confirm new password".to_string(),
                        Input {
                            r#type: "password",
                            value: confirm_password(),
                            oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-submit",
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Updating..." } else { "Update Password" }
                        }
                        if let Some(Ok(message)) = status() {
                            span { class: "status-ok", "{message}" }
                        }
                        if let Some(Err(message)) = status() {
                            span { class: "status-err", "{message}" }
                        }
                    }
                }
            }
        }
    }
}
