//! Prediction form view.
//!
//! The form renders straight from the declared field schema
//! ([`api::FIELDS`]): section headings, labels, select options, and
//! numeric steps all come from the table that validation checks against.

use dioxus::prelude::*;

use api::{
    BulkPredictionResponse, FieldKind, FieldSpec, PredictionDraft, PredictionResult, Section,
    ValidationErrors, FIELDS,
};
use ui::{risk_class, Button, ButtonVariant, FormField, Input, ModalOverlay, Select};

use crate::download;

#[component]
pub fn Predict() -> Element {
    let draft = use_signal(PredictionDraft::new);
    let mut errors = use_signal(ValidationErrors::new);
    let mut loading = use_signal(|| false);
    let mut result = use_signal(|| Option::<PredictionResult>::None);
    let mut show_modal = use_signal(|| false);
    let mut submit_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_error.set(None);

        match draft().validate() {
            Err(field_errors) => errors.set(field_errors),
            Ok(input) => {
                errors.set(ValidationErrors::new());
                loading.set(true);
                result.set(None);
                spawn(async move {
                    match api::make_client().predict(&input).await {
                        Ok(prediction) => {
                            result.set(Some(prediction));
                            show_modal.set(true);
                        }
                        Err(err) => {
                            tracing::error!("prediction failed: {err}");
                            submit_error.set(Some("Prediction failed".to_string()));
                        }
                    }
                    loading.set(false);
                });
            }
        }
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Newborn Risk Prediction" }

            form {
                onsubmit: handle_submit,

                for section in Section::ALL {
                    h2 { class: "form-section-title", "{section.title()}" }
                    div {
                        class: "form-grid",
                        for spec in FIELDS.iter().filter(|f| f.section == section) {
                            {field_input(spec, draft, errors)}
                        }
                    }
                }

                if let Some(err) = submit_error() {
                    div { class: "form-alert", "{err}" }
                }

                div {
                    class: "form-submit",
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Predicting..." } else { "Submit Prediction" }
                    }
                }
            }

            BulkSection {}
        }

        if show_modal() {
            if let Some(prediction) = result() {
                ModalOverlay {
                    on_close: move |_| show_modal.set(false),

                    h2 { class: "modal-title", "Prediction Result" }

                    for item in prediction.results.clone() {
                        div {
                            class: "condition-card",
                            p {
                                span { class: "condition-label", "Condition: " }
                                "{item.condition}"
                            }
                            p {
                                span { class: "condition-label", "Risk Level: " }
                                span { class: risk_class(item.risk()), "{item.risk_level}" }
                            }
                            p {
                                span { class: "condition-label", "Likelihood: " }
                                "{item.percent()}%"
                            }
                        }
                    }

                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_modal.set(false),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

/// One schema-driven form control with its inline error.
fn field_input(
    spec: &'static FieldSpec,
    mut draft: Signal<PredictionDraft>,
    mut errors: Signal<ValidationErrors>,
) -> Element {
    let value = draft().get(spec.name).to_string();
    let error = errors().get(spec.name).cloned();
    let invalid = error.is_some();

    let oninput = move |evt: FormEvent| {
        draft.write().set(spec.name, evt.value());
        errors.write().remove(spec.name);
    };

    let control = match spec.kind {
        FieldKind::Text => rsx! {
            Input {
                r#type: "text",
                value: value,
                invalid: invalid,
                oninput: oninput,
            }
        },
        FieldKind::Code { options } => rsx! {
            Select {
                options: options.iter().map(|(code, label)| (*code, label.to_string())).collect::<Vec<_>>(),
                value: value,
                invalid: invalid,
                onchange: oninput,
            }
        },
        FieldKind::Int { .. } | FieldKind::Float { .. } => rsx! {
            Input {
                r#type: "number",
                step: spec.step().map(String::from),
                value: value,
                invalid: invalid,
                oninput: oninput,
            }
        },
    };

    rsx! {
        FormField {
            label: spec.label.to_string(),
            error: error,
            {control}
        }
    }
}

/// Batch scoring: upload a spreadsheet of inputs, download the results.
#[component]
fn BulkSection() -> Element {
    let mut selected = use_signal(|| Option::<(String, Vec<u8>)>::None);
    let mut outcome = use_signal(|| Option::<BulkPredictionResponse>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut uploading = use_signal(|| false);

    let handle_file = move |evt: FormEvent| {
        spawn(async move {
            if let Some(file_engine) = evt.files() {
                if let Some(file_name) = file_engine.files().first().cloned() {
                    if let Some(contents) = file_engine.read_file(&file_name).await {
                        selected.set(Some((file_name, contents)));
                        outcome.set(None);
                        status.set(None);
                    }
                }
            }
        });
    };

    let handle_upload = move |_| {
        let Some((file_name, contents)) = selected() else {
            status.set(Some("Choose a file first".to_string()));
            return;
        };
        spawn(async move {
            uploading.set(true);
            status.set(None);
            match api::make_client().predict_bulk(&file_name, contents).await {
                Ok(response) => {
                    status.set(Some(format!("Scored {} rows", response.count)));
                    outcome.set(Some(response));
                }
                Err(err) => {
                    tracing::error!("bulk prediction failed: {err}");
                    status.set(Some(err.message().to_string()));
                }
            }
            uploading.set(false);
        });
    };

    let handle_download = move |_| {
        if let Some(response) = outcome() {
            spawn(async move {
                match api::make_client().download(&response.download_file_name).await {
                    Ok(bytes) => download::save_spreadsheet("Bulk_Predictions.xlsx", &bytes),
                    Err(err) => tracing::error!("bulk download failed: {err}"),
                }
            });
        }
    };

    rsx! {
        div {
            class: "bulk-section",
            h2 { class: "form-section-title", "Bulk Prediction" }
            p {
                class: "view-muted",
                "Upload a spreadsheet with one infant per row to score them all at once."
            }

            div {
                class: "bulk-controls",
                input {
                    r#type: "file",
                    accept: ".csv,.xlsx",
                    onchange: handle_file,
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: uploading() || selected().is_none(),
                    onclick: handle_upload,
                    if uploading() { "Uploading..." } else { "Upload & Score" }
                }
                if outcome().is_some() {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: handle_download,
                        "Download Results"
                    }
                }
            }

            if let Some(message) = status() {
                p { class: "view-muted", "{message}" }
            }
        }
    }
}
