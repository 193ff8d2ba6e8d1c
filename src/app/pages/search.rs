//! Full search results page (`/search?q=`)

use dioxus::prelude::*;

use crate::app::components::AccountItem;
use crate::domain::models::SearchType;
use crate::shared::services::SearchService;

#[component]
pub fn Search(q: String) -> Element {
    let service = use_context::<SearchService>();
    let submitted = q.clone();

    let accounts = use_resource(use_reactive!(|(submitted,)| {
        let service = service.clone();
        async move {
            let query = submitted.trim().to_string();
            if query.is_empty() {
                return Vec::new();
            }
            service.search(&query, SearchType::More).await.unwrap_or_default()
        }
    }));

    rsx! {
        section { class: "c-page c-page--search",
            h2 { class: "c-page__title", "Results for \"{q}\"" }

            match &*accounts.read() {
                None => rsx! {
                    div { class: "c-loading",
                        div { class: "c-loading__spinner" }
                    }
                },
                Some(list) if list.is_empty() => rsx! {
                    p { class: "c-page__empty", "No accounts found" }
                },
                Some(list) => rsx! {
                    for account in list.iter() {
                        AccountItem { key: "{account.id}", account: account.clone() }
                    }
                },
            }
        }
    }
}
