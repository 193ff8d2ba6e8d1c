use dioxus::prelude::*;

use crate::app::components::icons::CheckIcon;
use crate::app::pages::routes::Route;
use crate::domain::models::AccountRecord;

/// One account row: avatar, name with verified badge, nickname
#[component]
pub fn AccountItem(
    account: AccountRecord,
    #[props(default)] on_select: Option<EventHandler<AccountRecord>>,
) -> Element {
    let name = account.display_name();
    let initial = name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();
    let selected = account.clone();

    rsx! {
        div {
            class: "c-account-item",
            onclick: move |_| {
                if let Some(handler) = &on_select {
                    handler.call(selected.clone());
                }
            },
            Link {
                class: "c-account-item__link",
                to: Route::Profile { nickname: account.nickname.clone() },
                if account.has_avatar() {
                    img {
                        class: "c-account-item__avatar",
                        src: "{account.avatar}",
                        alt: "{name}",
                    }
                } else {
                    div { class: "c-account-item__avatar c-account-item__avatar--placeholder", "{initial}" }
                }
                div { class: "c-account-item__info",
                    p { class: "c-account-item__name",
                        span { "{name}" }
                        if account.tick {
                            CheckIcon {}
                        }
                    }
                    span { class: "c-account-item__username", "{account.nickname}" }
                }
            }
        }
    }
}
