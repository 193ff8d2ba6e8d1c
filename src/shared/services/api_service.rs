#[cfg(target_arch = "wasm32")]
use reqwasm::http::Request;

use serde::de::DeserializeOwned;

use crate::shared::errors::{AppError, Result};

// API Service for centralized HTTP requests
#[derive(Debug, Clone)]
pub struct ApiService {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl ApiService {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and endpoint, then append percent-encoded params
    pub fn build_url<K, V>(&self, endpoint: &str, params: &[(K, V)]) -> String
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(k.as_ref()),
                        urlencoding::encode(v.as_ref())
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }

        url
    }

    // Generic GET request
    #[cfg(target_arch = "wasm32")]
    pub async fn get<T, K, V>(&self, endpoint: &str, params: &[(K, V)]) -> Result<T>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.build_url(endpoint, params);
        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::Http(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    // Generic GET request
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn get<T, K, V>(&self, endpoint: &str, params: &[(K, V)]) -> Result<T>
    where
        T: DeserializeOwned,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let url = self.build_url(endpoint, params);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| AppError::Decode(e.to_string()))
    }
}
