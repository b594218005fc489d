//! Configuration for the dashboard and its API client

use crate::error::{DashboardError, Result};
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Longest price history the charts will ask for, about a century
pub const MAX_HISTORY_DAYS: u32 = 36_500;

/// Configuration for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the SEBA analysis API
    pub api_base_url: String,

    /// Bearer token sent with every request (optional)
    pub api_token: Option<String>,

    /// Transport timeout for a single API request
    pub request_timeout: Duration,

    /// Days of price history requested for the charts
    pub history_days: u32,

    /// Language used for every painted string
    pub language: Language,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            api_token: None,
            request_timeout: Duration::from_secs(30),
            history_days: 365,
            language: Language::English,
        }
    }
}

impl DashboardConfig {
    /// Create a new configuration builder
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Defaults overlaid with the environment
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Overlay `SEBA_API_BASE`, `SEBA_API_TOKEN` and `SEBA_LANG` from the environment
    pub fn with_env(mut self) -> Self {
        if let Ok(base) = std::env::var("SEBA_API_BASE") {
            self.api_base_url = base;
        }
        if let Ok(token) = std::env::var("SEBA_API_TOKEN") {
            self.api_token = Some(token);
        }
        if let Ok(lang) = std::env::var("SEBA_LANG") {
            self.language = Language::from_code(&lang);
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            return Err(DashboardError::Config(
                "api_base_url must not be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.api_base_url).map_err(|e| {
            DashboardError::Config(format!("api_base_url '{}': {e}", self.api_base_url))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(DashboardError::Config(format!(
                "api_base_url '{}' cannot be used as a base URL",
                self.api_base_url
            )));
        }

        if self.request_timeout.is_zero() {
            return Err(DashboardError::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.history_days == 0 {
            return Err(DashboardError::Config(
                "history_days must be greater than 0".to_string(),
            ));
        }
        if self.history_days > MAX_HISTORY_DAYS {
            return Err(DashboardError::Config(format!(
                "history_days must be at most {MAX_HISTORY_DAYS}, got {}",
                self.history_days
            )));
        }

        Ok(())
    }
}

/// Builder for DashboardConfig
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    api_base_url: Option<String>,
    api_token: Option<String>,
    request_timeout: Option<Duration>,
    history_days: Option<u32>,
    language: Option<Language>,
}

impl DashboardConfigBuilder {
    /// Set the API base URL
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Set the bearer token
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the history window in days
    pub fn history_days(mut self, days: u32) -> Self {
        self.history_days = Some(days);
        self
    }

    /// Set the display language
    pub fn language(mut self, language: impl Into<Language>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DashboardConfig> {
        let defaults = DashboardConfig::default();

        let config = DashboardConfig {
            api_base_url: self.api_base_url.unwrap_or(defaults.api_base_url),
            api_token: self.api_token.or(defaults.api_token),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            history_days: self.history_days.unwrap_or(defaults.history_days),
            language: self.language.unwrap_or(defaults.language),
        };

        config.validate()?;
        Ok(config)
    }
}
