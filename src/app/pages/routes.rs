use dioxus::prelude::*;

use crate::app::layouts::{DefaultLayout, HeaderOnly};
use crate::app::pages::{Following, Home, Profile, Search, Upload};
use crate::config::APP_CONFIG;
use crate::shared::services::SearchService;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DefaultShell)]
        #[route("/")]
        Home {},
        #[route("/following")]
        Following {},
        #[route("/profile/:nickname")]
        Profile { nickname: String },
        #[route("/search?:q")]
        Search { q: String },
    #[end_layout]

    #[layout(HeaderOnlyShell)]
        #[route("/upload")]
        Upload {},
}

#[component]
pub fn App() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_context_provider(|| APP_CONFIG.clone());
    use_context_provider(|| SearchService::from_config(&APP_CONFIG));

    use_effect(|| {
        tracing::info!(api_base_url = %APP_CONFIG.api_base_url, "App initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Router::<Route> {}
    }
}

#[component]
fn DefaultShell() -> Element {
    rsx! {
        DefaultLayout {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn HeaderOnlyShell() -> Element {
    rsx! {
        HeaderOnly {
            Outlet::<Route> {}
        }
    }
}
