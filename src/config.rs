//! Application configuration
//!
//! The browser bundle has no runtime environment, so client settings are
//! baked in at compile time. The server reads its own settings from CLI
//! flags or environment variables.

use once_cell::sync::Lazy;
use std::time::Duration;

use crate::domain::models::SearchType;

/// Default quiet period before a search fires
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Same-origin proxy served by this application
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Public API the proxy forwards to
pub const DEFAULT_UPSTREAM_URL: &str = "https://tiktok.fullstack.edu.vn/api";

/// Client-side settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub search_type: SearchType,
    pub debounce_ms: u64,
}

impl AppConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TIKTOK_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            search_type: SearchType::Less,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Process-wide client configuration
pub static APP_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::default);

/// Server settings (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "tiktok-ui", about = "Serve the web front-end and the account search proxy")]
pub struct ServerArgs {
    /// Base URL of the upstream API the search proxy forwards to
    #[arg(long, env = "TIKTOK_UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Port for the standalone proxy server
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,
}

#[cfg(not(target_arch = "wasm32"))]
impl ServerArgs {
    pub fn validate(&self) -> crate::shared::errors::Result<()> {
        if self.upstream_url.trim().is_empty() {
            return Err(crate::shared::errors::AppError::Config(
                "upstream URL must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
