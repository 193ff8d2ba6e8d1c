use crate::app::pages::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside { class: "c-sidebar",
            nav { class: "c-sidebar__nav",
                ul {
                    li {
                        Link {
                            to: Route::Home {},
                            active_class: "c-sidebar__link--active",
                            "🏠 For You"
                        }
                    }
                    li {
                        Link {
                            to: Route::Following {},
                            active_class: "c-sidebar__link--active",
                            "👥 Following"
                        }
                    }
                }
            }
        }
    }
}
