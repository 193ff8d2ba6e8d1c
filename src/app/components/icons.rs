//! Inline SVG icons
use dioxus::prelude::*;

const MAGNIFIER_PATH: &str = "M22 10C15.3726 10 10 15.3726 10 22C10 28.6274 15.3726 34 22 34C28.6274 34 34 28.6274 34 22C34 15.3726 28.6274 10 22 10ZM6 22C6 13.1634 13.1634 6 22 6C30.8366 6 38 13.1634 38 22C38 25.6974 36.7458 29.1019 34.6397 31.8113L43.3809 40.5565C43.7712 40.947 43.7712 41.5801 43.3807 41.9705L41.9665 43.3847C41.5759 43.7753 40.9426 43.7752 40.5521 43.3846L31.8113 34.6397C29.1019 36.7458 25.6974 38 22 38C13.1634 38 6 30.8366 6 22Z";

/// Magnifier; `filled` is the hover variant
#[component]
pub fn SearchIcon(#[props(default)] filled: bool) -> Element {
    let fill = if filled { "rgba(22, 24, 35, 1)" } else { "rgba(22, 24, 35, 0.34)" };

    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 48 48",
            fill: "{fill}",
            xmlns: "http://www.w3.org/2000/svg",
            path { fill_rule: "evenodd", clip_rule: "evenodd", d: MAGNIFIER_PATH }
        }
    }
}

#[component]
pub fn ClearIcon() -> Element {
    rsx! {
        svg {
            class: "c-icon",
            width: "16",
            height: "16",
            view_box: "0 0 512 512",
            fill: "currentColor",
            xmlns: "http://www.w3.org/2000/svg",
            path { d: "M256 512A256 256 0 1 0 256 0a256 256 0 1 0 0 512zM175 175c9.4-9.4 24.6-9.4 33.9 0l47 47 47-47c9.4-9.4 24.6-9.4 33.9 0s9.4 24.6 0 33.9l-47 47 47 47c9.4 9.4 9.4 24.6 0 33.9s-24.6 9.4-33.9 0l-47-47-47 47c-9.4 9.4-24.6 9.4-33.9 0s-9.4-24.6 0-33.9l47-47-47-47c-9.4-9.4-9.4-24.6 0-33.9z" }
        }
    }
}

/// Spinning notch shown while a search is in flight
#[component]
pub fn LoadingIcon() -> Element {
    rsx! {
        svg {
            class: "c-icon c-icon--spin",
            width: "16",
            height: "16",
            view_box: "0 0 512 512",
            fill: "currentColor",
            xmlns: "http://www.w3.org/2000/svg",
            path { d: "M222.7 32.1c5 16.9-4.6 34.8-21.5 39.8C121.8 95.6 64 169.1 64 256c0 106 86 192 192 192s192-86 192-192c0-86.9-57.8-160.4-137.1-184.1c-16.9-5-26.6-22.9-21.5-39.8s22.9-26.6 39.8-21.5C434.9 42.1 512 140 512 256c0 141.4-114.6 256-256 256S0 397.4 0 256C0 140 77.1 42.1 182.9 10.6c16.9-5 34.8 4.6 39.8 21.5z" }
        }
    }
}

/// Verified badge next to an account name
#[component]
pub fn CheckIcon() -> Element {
    rsx! {
        svg {
            class: "c-icon c-icon--check",
            width: "14",
            height: "14",
            view_box: "0 0 512 512",
            xmlns: "http://www.w3.org/2000/svg",
            circle { cx: "256", cy: "256", r: "256", fill: "#20d5ec" }
            path {
                d: "M369 209L241 337c-9.4 9.4-24.6 9.4-33.9 0l-64-64c-9.4-9.4-9.4-24.6 0-33.9s24.6-9.4 33.9 0l47 47L335 175c9.4-9.4 24.6-9.4 33.9 0s9.4 24.6 0 33.9z",
                fill: "#fff",
            }
        }
    }
}
