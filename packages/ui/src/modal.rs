use dioxus::prelude::*;

/// Centered modal card over a dimmed backdrop. Clicking the backdrop
/// closes; clicks inside the card do not propagate out.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
                {children}
            }
        }
    }
}
