use dioxus::prelude::*;

use super::Header;

/// Header above a centered content container, no sidebar
#[component]
pub fn HeaderOnly(children: Element) -> Element {
    rsx! {
        div { class: "c-layout",
            Header {}
            div { class: "c-layout__container",
                div { class: "c-layout__content", {children} }
            }
        }
    }
}
