use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "c-page c-page--home",
            h2 { class: "c-page__title", "For You" }
        }
    }
}
