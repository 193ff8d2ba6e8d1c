/// Same-origin proxy for the upstream account search API
pub mod search_proxy;

pub use search_proxy::{search_proxy_handler, search_proxy_routes, SearchProxyState};
