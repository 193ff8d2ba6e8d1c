use axum::{
    extract::Query,
    routing::get,
    Extension, Json, Router,
};

use crate::domain::models::SearchParams;
use crate::shared::errors::AppError;
use crate::shared::logging::{log_proxy_error, log_proxy_request};
use crate::shared::services::{ApiService, SearchService};

/// Proxy configuration
#[derive(Debug, Clone)]
pub struct SearchProxyState {
    pub upstream: ApiService,
}

impl SearchProxyState {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream: ApiService::with_base_url(upstream_url),
        }
    }
}

/// GET /api/users/search?q=&type=
/// Forward account search to the upstream API, body passed through as-is
pub async fn search_proxy_handler(
    Extension(state): Extension<SearchProxyState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let upstream = state.upstream.base_url();
    log_proxy_request(upstream, &params.q, params.search_type.as_str());

    state
        .upstream
        .get::<serde_json::Value, _, _>(SearchService::ENDPOINT, &params.to_pairs())
        .await
        .map(Json)
        .map_err(|e| {
            log_proxy_error(upstream, &e.to_string());
            e
        })
}

/// Routes served under the same origin as the web client
pub fn search_proxy_routes(state: SearchProxyState) -> Router {
    Router::new()
        .route("/api/users/search", get(search_proxy_handler))
        .layer(Extension(state))
}
