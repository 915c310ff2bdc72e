//! Form controls shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let kind = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: kind,
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] step: Option<String>,
    #[props(default)] value: String,
    #[props(default)] invalid: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let invalid_class = if invalid { " input-invalid" } else { "" };
    let kind = r#type;
    rsx! {
        input {
            class: "input{invalid_class} {class}",
            r#type: kind,
            placeholder: "{placeholder}",
            step: step,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// Select over `(code, label)` options with an empty placeholder row.
#[component]
pub fn Select(
    #[props(default)] class: String,
    #[props(default = "Select Option".to_string())] placeholder: String,
    options: Vec<(i64, String)>,
    #[props(default)] value: String,
    #[props(default)] invalid: bool,
    #[props(default)] onchange: EventHandler<FormEvent>,
) -> Element {
    let invalid_class = if invalid { " input-invalid" } else { "" };
    rsx! {
        select {
            class: "input{invalid_class} {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            option { value: "", "{placeholder}" }
            for (code, label) in options {
                option { value: "{code}", "{label}" }
            }
        }
    }
}

#[component]
pub fn Label(#[props(default)] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// A labeled control with its inline violation message.
#[component]
pub fn FormField(label: String, #[props(default)] error: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label { "{label}" }
            {children}
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
