//! Structured logging helpers
//!
//! Keeps field names consistent between the search box, the HTTP layer
//! and the proxy so traces can be filtered by `operation`.

/// Operations that emit structured logs
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Search,
    Debounce,
    Proxy,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Search => "search",
            LogOperation::Debounce => "debounce",
            LogOperation::Proxy => "proxy",
        }
    }
}

/// Log a search request leaving the client
pub fn log_search_start(query: &str, search_type: &str, seq: u64) {
    tracing::debug!(
        operation = LogOperation::Search.as_str(),
        query = query,
        search_type = search_type,
        seq = seq,
        "Searching accounts"
    );
}

/// Log a search response that was applied to the dropdown
pub fn log_search_result(query: &str, seq: u64, count: usize) {
    tracing::debug!(
        operation = LogOperation::Search.as_str(),
        query = query,
        seq = seq,
        result_count = count,
        "Search results applied"
    );
}

/// Log a swallowed search failure
pub fn log_search_error(query: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Search.as_str(),
        query = query,
        error = error,
        "Search request failed"
    );
}

/// Log a response that arrived after a newer request was issued
pub fn log_stale_response(query: &str, seq: u64, latest: u64) {
    tracing::debug!(
        operation = LogOperation::Search.as_str(),
        query = query,
        seq = seq,
        latest_seq = latest,
        "Discarded stale search response"
    );
}

/// Log a keystroke superseded within the quiet period
pub fn log_debounce_superseded(query: &str) {
    tracing::trace!(
        operation = LogOperation::Debounce.as_str(),
        query = query,
        "Input superseded before quiet period elapsed"
    );
}

/// Log a request forwarded by the server proxy
pub fn log_proxy_request(upstream: &str, query: &str, search_type: &str) {
    tracing::info!(
        operation = LogOperation::Proxy.as_str(),
        upstream = upstream,
        query = query,
        search_type = search_type,
        "Proxying account search"
    );
}

/// Log an upstream failure seen by the server proxy
pub fn log_proxy_error(upstream: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::Proxy.as_str(),
        upstream = upstream,
        error = error,
        "Upstream search failed"
    );
}
