use dioxus::prelude::*;

#[component]
pub fn Following() -> Element {
    rsx! {
        section { class: "c-page c-page--following",
            h2 { class: "c-page__title", "Following" }
        }
    }
}
