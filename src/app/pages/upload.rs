use dioxus::prelude::*;

#[component]
pub fn Upload() -> Element {
    rsx! {
        section { class: "c-page c-page--upload",
            h2 { class: "c-page__title", "Upload video" }
            p { class: "c-page__subtitle", "Post a video to your account" }
        }
    }
}
