use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default backend URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4000";

/// Default page size for user-directory searches
const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("AULANET_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .expect("default app config is valid");
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Page size for user-directory searches
    pub fn search_page_size(&self) -> u32 {
        self.app.search_page_size.unwrap_or(DEFAULT_SEARCH_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::AppConfig;

    fn fixed_config() -> Config {
        Config::with_builder(
            AppConfig::builder().server_url("http://127.0.0.1:4000".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_api_url() {
        let config = fixed_config();
        let url = config.api_url("/api/notifications/7");
        assert_eq!(url, "http://127.0.0.1:4000/api/notifications/7");
    }

    #[test]
    fn test_default_page_size() {
        let config = fixed_config();
        assert_eq!(config.search_page_size(), 10);
    }

    #[test]
    fn test_explicit_page_size() {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("http://127.0.0.1:4000".to_string())
                .search_page_size(25),
        )
        .unwrap();
        assert_eq!(config.search_page_size(), 25);
    }
}
