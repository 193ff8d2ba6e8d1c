use dioxus::prelude::*;

#[component]
pub fn Profile(nickname: String) -> Element {
    rsx! {
        section { class: "c-page c-page--profile",
            h2 { class: "c-page__title", "@{nickname}" }
        }
    }
}
