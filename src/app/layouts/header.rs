use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, SearchBox};
use crate::app::pages::routes::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "c-header",
            div { class: "c-header__inner",
                Link { class: "c-header__logo", to: Route::Home {},
                    span { class: "c-header__logo-mark", "♪" }
                    span { class: "c-header__logo-text", "TikTok" }
                }

                SearchBox {}

                div { class: "c-header__actions",
                    Button { variant: ButtonVariant::Text, to: Route::Upload {}, "+ Upload" }
                    Button { variant: ButtonVariant::Primary, "Log in" }
                }
            }
        }
    }
}
