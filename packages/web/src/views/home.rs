use dioxus::prelude::*;

use crate::Route;

/// Protected landing page.
#[component]
pub fn Home() -> Element {
    let auth = ui::use_auth();
    let state = auth();
    let greeting = state
        .user
        .as_ref()
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome back".to_string());

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{greeting}" }
            p {
                class: "view-muted",
                "Track your newborn's health indicators and review earlier assessments."
            }

            div {
                class: "home-cards",
                Link {
                    class: "home-card",
                    to: Route::Predict {},
                    h2 { "New Prediction" }
                    p { "Enter clinical measurements to assess condition risks." }
                }
                Link {
                    class: "home-card",
                    to: Route::Results {},
                    h2 { "Prediction History" }
                    p { "Browse past assessments and export them as a spreadsheet." }
                }
            }
        }
    }
}
