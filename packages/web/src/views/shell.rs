//! Sidebar layout wrapping every protected view.

use dioxus::prelude::*;

use ui::icons::{FaBrain, FaChartColumn, FaGear, FaRightFromBracket};
use ui::Icon;

use crate::Route;

#[component]
pub fn Shell() -> Element {
    let auth = ui::use_auth();
    let state = auth();
    let user_name = state
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "app-shell",

            aside {
                class: "sidebar",

                div {
                    class: "sidebar-user",
                    Link {
                        class: "sidebar-brand",
                        to: Route::Home {},
                        "NeoWatch"
                    }
                    span { class: "sidebar-user-name", "{user_name}" }
                }

                nav {
                    class: "sidebar-nav",
                    NavItem { to: Route::Predict {}, label: "Predict",
                        Icon { icon: FaBrain, width: 14, height: 14 }
                    }
                    NavItem { to: Route::Results {}, label: "Results",
                        Icon { icon: FaChartColumn, width: 14, height: 14 }
                    }
                    NavItem { to: Route::Settings {}, label: "Settings",
                        Icon { icon: FaGear, width: 14, height: 14 }
                    }
                }

                div {
                    class: "sidebar-bottom",
                    LogoutItem {}
                }
            }

            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NavItem(to: Route, label: String, children: Element) -> Element {
    let route = use_route::<Route>();
    let class = if route == to {
        "sidebar-item active"
    } else {
        "sidebar-item"
    };

    rsx! {
        Link {
            class: "{class}",
            to: to.clone(),
            {children}
            span { "{label}" }
        }
    }
}

#[component]
fn LogoutItem() -> Element {
    let mut auth = ui::use_auth();

    rsx! {
        button {
            class: "sidebar-item sidebar-logout",
            onclick: move |_| ui::sign_out(&mut auth),
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "Log out" }
        }
    }
}
