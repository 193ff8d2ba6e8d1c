// Shared services
// ApiService is the HTTP wrapper; SearchService is the account search adapter on top of it
pub mod api_service;
pub mod search_service;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) mod test_support;

pub use api_service::ApiService;
pub use search_service::{SearchProvider, SearchService};
