//! Prediction history view: summary table, detail modal, export.

use dioxus::prelude::*;

use api::{HistoryRecord, SUMMARY_CONDITIONS};
use ui::{risk_class, Button, ButtonVariant, Icon, ModalOverlay, RiskBadge};
use ui::icons::FaDownload;

use crate::download;

#[component]
pub fn Results() -> Element {
    let mut records = use_signal(Vec::<HistoryRecord>::new);
    let mut loading = use_signal(|| true);
    let mut selected = use_signal(|| Option::<HistoryRecord>::None);

    let _loader = use_resource(move || async move {
        match api::make_client().history().await {
            Ok(list) => records.set(list),
            Err(err) => tracing::error!("history fetch failed: {err}"),
        }
        loading.set(false);
    });

    // Export failure is logged, not surfaced; the table stays usable.
    let handle_export = move |_| {
        spawn(async move {
            match api::make_client().export_history().await {
                Ok(bytes) => download::save_spreadsheet("My_Prediction_History.xlsx", &bytes),
                Err(err) => tracing::error!("history export failed: {err}"),
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "view-page", p { class: "view-muted", "Loading..." } }
        };
    }

    rsx! {
        div {
            class: "view-page",

            div {
                class: "view-header",
                h1 { class: "view-title", "Prediction History" }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: handle_export,
                    "Export"
                    Icon { icon: FaDownload, width: 14, height: 14 }
                }
            }

            if records().is_empty() {
                p { class: "view-muted", "No predictions yet. Submit one from the Predict page." }
            } else {
                div {
                    class: "history-table-wrap",
                    table {
                        class: "history-table",
                        thead {
                            tr {
                                th { "Name" }
                                for condition in SUMMARY_CONDITIONS {
                                    th { "{condition}" }
                                }
                                th { "Date" }
                            }
                        }
                        tbody {
                            for record in records() {
                                RecordRow {
                                    record: record.clone(),
                                    on_select: move |r| selected.set(Some(r)),
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(record) = selected() {
            RecordDetail {
                record: record,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[component]
fn RecordRow(record: HistoryRecord, on_select: EventHandler<HistoryRecord>) -> Element {
    let prediction = record.prediction().cloned();
    let name = prediction
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    let date = format_date(&record.date);
    let row_record = record.clone();

    rsx! {
        tr {
            class: "history-row",
            onclick: move |_| on_select.call(row_record.clone()),
            td { class: "history-name", "{name}" }
            for condition in SUMMARY_CONDITIONS {
                td {
                    if let Some(result) = prediction.as_ref().and_then(|p| p.condition(condition)) {
                        RiskBadge { result: result.clone() }
                    }
                }
            }
            td { class: "history-date", "{date}" }
        }
    }
}

#[component]
fn RecordDetail(record: HistoryRecord, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),

            h2 { class: "modal-title", "Detailed Prediction" }

            if let Some(prediction) = record.prediction() {
                div {
                    class: "condition-grid",
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
                }
            }

            h3 { class: "modal-subtitle", "Input Parameters" }
            div {
                class: "input-grid",
                for (key, value) in record.inputs() {
                    div {
                        class: "input-row",
                        span { class: "input-key", {key.replace('_', " ")} ":" }
                        span { class: "input-value", {display_value(value)} }
                    }
                }
            }

            div {
                class: "modal-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}

/// Print a stored input value without JSON quoting.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn format_date(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

#[cfg(not(target_arch = "wasm32"))]
fn format_date(iso: &str) -> String {
    iso.to_string()
}
