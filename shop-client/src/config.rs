//! Client configuration

use crate::error::{ClientError, ClientResult};

/// Configuration for connecting to the commerce API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g. "https://shop.example.com")
    pub base_url: String,
    /// API path segment identifying the store (e.g. "demo-shop")
    pub api_path: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout
    pub fn new(base_url: impl Into<String>, api_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_path: api_path.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Load configuration from the environment
    ///
    /// Reads `SHOP_BASE_URL` and `SHOP_API_PATH` (required) plus
    /// `SHOP_TIMEOUT` (optional, seconds). A `.env` file is honored if
    /// present.
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();

        let base_url = std::env::var("SHOP_BASE_URL")
            .map_err(|_| ClientError::Config("SHOP_BASE_URL is not set".into()))?;
        let api_path = std::env::var("SHOP_API_PATH")
            .map_err(|_| ClientError::Config("SHOP_API_PATH is not set".into()))?;

        let mut config = Self::new(base_url, api_path);
        if let Ok(timeout) = std::env::var("SHOP_TIMEOUT") {
            let seconds = timeout
                .parse()
                .map_err(|_| ClientError::Config(format!("invalid SHOP_TIMEOUT: {timeout}")))?;
            config = config.with_timeout(seconds);
        }
        Ok(config)
    }
}
