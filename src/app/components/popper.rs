use dioxus::prelude::*;

/// Floating surface for dropdowns (BEM: c-popper)
#[component]
pub fn PopperWrapper(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "c-popper {class}", tabindex: "-1",
            {children}
        }
    }
}
