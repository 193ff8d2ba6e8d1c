use dioxus::prelude::*;

use crate::app::pages::routes::Route;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Text,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Outline => "c-button--outline",
            ButtonVariant::Text => "c-button--text",
        }
    }
}

/// Button, or a link styled as one when `to` is set
#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    to: Option<Route>,
    disabled: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Primary).class();
    let disabled = disabled.unwrap_or(false);

    if let Some(route) = to {
        return rsx! {
            Link { class: "c-button {variant_class}", to: route,
                {children}
            }
        };
    }

    rsx! {
        button {
            class: "c-button {variant_class}",
            disabled: disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
