//! Application configuration module
//!
//! Provides configuration types for the client.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Backend base URL
    pub server_url: Option<String>,
    /// Page size used by the user-directory search endpoint
    pub search_page_size: Option<u32>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.search_page_size {
            if size == 0 {
                return Err(ConfigError::InvalidValue("search_page_size must be positive"));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    search_page_size: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the backend base URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the search page size
    pub fn search_page_size(mut self, size: u32) -> Self {
        self.search_page_size = Some(size);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            search_page_size: self.search_page_size,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
