//! tiktok-ui - Main Entry Point
//!
//! Serves the Dioxus application together with the account search proxy.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use tiktok_ui::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use clap::Parser;
    use tiktok_ui::config::ServerArgs;
    use tiktok_ui::handlers::{search_proxy_routes, SearchProxyState};
    use tower_http::trace::TraceLayer;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ServerArgs::parse();
    if let Err(e) = args.validate() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    tracing::info!(upstream = %args.upstream_url, "Starting tiktok-ui...");

    dioxus::serve(move || {
        let proxy_state = SearchProxyState::new(args.upstream_url.clone());
        async move {
            let router = dioxus::server::router(App)
                .merge(search_proxy_routes(proxy_state))
                .layer(TraceLayer::new_for_http());

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] tiktok-ui initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
