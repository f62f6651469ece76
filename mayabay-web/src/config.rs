//! Frontend configuration module
//!
//! Provides the backend base URL and other frontend-specific settings.

/// Frontend configuration for URLs and external settings
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the Maya Bay backend API
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("MAYABAY_API_URL")
                .unwrap_or("http://127.0.0.1:8000")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(config.api_base_url.starts_with("http"));
    }

    #[test]
    fn test_frontend_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
