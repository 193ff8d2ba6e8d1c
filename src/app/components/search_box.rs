//! Header search box
//!
//! Debounced account search with a dropdown of matching accounts.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::components::icons::{ClearIcon, LoadingIcon, SearchIcon};
use crate::app::components::{AccountItem, PopperWrapper};
use crate::app::pages::routes::Route;
use crate::domain::models::AccountRecord;
use crate::shared::hooks::use_search_box;

#[component]
pub fn SearchBox() -> Element {
    let search = use_search_box();
    let state = search.state;
    let mut input_ref = use_signal(|| None::<Rc<MountedData>>);
    let mut button_hovered = use_signal(|| false);

    let select_handle = search.clone();
    let on_select = use_callback(move |account: AccountRecord| select_handle.on_select(&account));

    let input_handle = search.clone();
    let focus_handle = search.clone();
    let key_handle = search.clone();
    let clear_handle = search.clone();
    let outside_handle = search.clone();

    let (input, results, dropdown_visible, show_spinner, show_clear) = {
        let current = state.read();
        (
            current.input().to_string(),
            current.results().to_vec(),
            current.dropdown_visible(),
            current.show_spinner(),
            current.show_clear_button(),
        )
    };
    let search_route = Route::Search { q: input.trim().to_string() };

    rsx! {
        div { class: "c-search",
            if dropdown_visible {
                div {
                    class: "c-search__backdrop",
                    onclick: move |_| outside_handle.on_click_outside(),
                }
            }

            div { class: "c-search__bar",
                input {
                    r#type: "text",
                    class: "c-search__input",
                    placeholder: "Search",
                    spellcheck: "false",
                    value: "{input}",
                    onmounted: move |evt| input_ref.set(Some(evt.data())),
                    onfocus: move |_| focus_handle.on_focus(),
                    oninput: move |evt| input_handle.on_input(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Escape {
                            key_handle.on_click_outside();
                        }
                    },
                }

                if show_spinner {
                    span { class: "c-search__loading", LoadingIcon {} }
                }
                if show_clear {
                    button {
                        class: "c-search__clear",
                        r#type: "button",
                        onclick: move |_| {
                            clear_handle.on_clear();
                            if let Some(element) = input_ref() {
                                spawn(async move {
                                    let _ = element.set_focus(true).await;
                                });
                            }
                        },
                        ClearIcon {}
                    }
                }

                div {
                    class: "c-search__button",
                    onmouseenter: move |_| button_hovered.set(true),
                    onmouseleave: move |_| button_hovered.set(false),
                    Link { to: search_route,
                        SearchIcon { filled: button_hovered() }
                    }
                }
            }

            if dropdown_visible {
                PopperWrapper { class: "c-search__result",
                    h4 { class: "c-search__title", "Accounts" }
                    for account in results {
                        AccountItem {
                            key: "{account.id}",
                            account: account.clone(),
                            on_select: on_select,
                        }
                    }
                }
            }
        }
    }
}
