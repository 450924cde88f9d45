//! Connection settings for the tournament service.

use std::time::Duration;

use crate::{DashboardError, Result, BASE_URL_ENV_VAR};

/// Base URL used when neither the flag nor the environment names one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiConfig {
    /// Validate `base_url` and strip any trailing slash.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        match reqwest::Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Self {
                base_url: trimmed.to_string(),
                timeout: None,
            }),
            _ => Err(DashboardError::InvalidBaseUrl {
                url: base_url.to_string(),
            }),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolve the base URL from the flag, then `TOURNAMENT_API_URL`, then the default.
    pub fn resolve(base_url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let base_url = base_url
            .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let config = Self::new(&base_url)?;
        Ok(match timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}
