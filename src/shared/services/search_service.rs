use std::future::Future;

use crate::config::AppConfig;
use crate::domain::models::{AccountRecord, SearchParams, SearchResponse, SearchType};
use crate::shared::errors::Result;
use crate::shared::logging::log_search_error;

use super::ApiService;

/// Source of account search results for the search box
pub trait SearchProvider {
    /// `None` means the search failed; the failure has already been logged.
    fn search(
        &self,
        query: &str,
        search_type: SearchType,
    ) -> impl Future<Output = Option<Vec<AccountRecord>>>;
}

/// Account search over `users/search`
#[derive(Debug, Clone)]
pub struct SearchService {
    api: ApiService,
    default_type: SearchType,
}

impl SearchService {
    pub const ENDPOINT: &'static str = "users/search";

    pub fn new(api: ApiService) -> Self {
        Self {
            api,
            default_type: SearchType::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ApiService::with_base_url(config.api_base_url.clone()))
            .with_default_type(config.search_type)
    }

    pub fn with_default_type(mut self, search_type: SearchType) -> Self {
        self.default_type = search_type;
        self
    }

    pub fn default_type(&self) -> SearchType {
        self.default_type
    }

    pub async fn try_search(&self, query: &str, search_type: SearchType) -> Result<Vec<AccountRecord>> {
        let params = SearchParams::new(query, search_type);
        let response: SearchResponse = self.api.get(Self::ENDPOINT, &params.to_pairs()).await?;
        Ok(response.into_accounts())
    }

    /// Search, logging and swallowing any failure
    pub async fn search(&self, query: &str, search_type: SearchType) -> Option<Vec<AccountRecord>> {
        match self.try_search(query, search_type).await {
            Ok(accounts) => Some(accounts),
            Err(e) => {
                log_search_error(query, &e.to_string());
                None
            }
        }
    }

    pub async fn search_default(&self, query: &str) -> Option<Vec<AccountRecord>> {
        self.search(query, self.default_type).await
    }
}

impl SearchProvider for SearchService {
    async fn search(&self, query: &str, search_type: SearchType) -> Option<Vec<AccountRecord>> {
        SearchService::search(self, query, search_type).await
    }
}
