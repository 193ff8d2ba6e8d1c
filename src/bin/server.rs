//! Standalone search proxy (without Dioxus frontend)
//! Use this when the web client is served from another origin.
//!
//! Run with: cargo run --bin server --features server -- --port 3001

use clap::Parser;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use tiktok_ui::config::ServerArgs;
use tiktok_ui::handlers::{search_proxy_routes, SearchProxyState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = ServerArgs::parse();
    args.validate()?;

    tracing::info!(upstream = %args.upstream_url, "Starting tiktok-ui search proxy (standalone)...");

    let app = search_proxy_routes(SearchProxyState::new(args.upstream_url.clone()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("Proxy running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
