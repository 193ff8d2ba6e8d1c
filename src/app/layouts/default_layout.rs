use dioxus::prelude::*;

use super::{Header, Sidebar};

#[component]
pub fn DefaultLayout(children: Element) -> Element {
    rsx! {
        div { class: "c-layout",
            Header {}
            div { class: "c-layout__container",
                Sidebar {}
                main { class: "c-layout__content", {children} }
            }
        }
    }
}
