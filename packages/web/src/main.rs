use dioxus::prelude::*;

use ui::AuthProvider;
use views::{AuthEntry, Home, Predict, Results, Settings, Shell};

mod download;
mod gate;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(SessionGate)]
        #[route("/")]
        AuthEntry {},
        #[layout(Shell)]
            #[route("/home")]
            Home {},
            #[route("/predict")]
            Predict {},
            #[route("/results")]
            Results {},
            #[route("/settings")]
            Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::COMPONENTS_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Outermost layout: evaluate the session gate on every navigation.
#[component]
fn SessionGate() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let auth = ui::use_auth();

    if let Some(target) = gate::redirect_for(&route.to_string(), auth().authenticated) {
        let to = if target == gate::ENTRY_PATH {
            Route::AuthEntry {}
        } else {
            Route::Home {}
        };
        nav.replace(to);
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
