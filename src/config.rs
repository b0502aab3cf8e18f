//! # Validator Configuration
//!
//! Settings loaded from environment variables.

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_REGION, ENV_ENDPOINT_URL, ENV_LOG_ENABLE_COLOR, ENV_LOG_LEVEL,
    ENV_REGION,
};

/// Validator configuration
///
/// All settings have defaults and can be overridden via environment variables.
/// Credentials are not configured here; the AWS SDK default chain supplies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// AWS region the EC2 client talks to
    pub region: String,
    /// Optional EC2 endpoint override (e.g. `http://localhost:4566`)
    pub endpoint_url: Option<String>,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Enable color in text format logs
    pub log_enable_color: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_enable_color: false,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            region: get(ENV_REGION).unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: get(ENV_ENDPOINT_URL),
            log_level: get(ENV_LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_enable_color: get(ENV_LOG_ENABLE_COLOR).is_some_and(|v| parse_bool(&v)),
        }
    }

    /// Override the region (CLI flags take precedence over the environment)
    #[must_use]
    pub fn with_region(mut self, region: Option<String>) -> Self {
        if let Some(region) = region {
            self.region = region;
        }
        self
    }

    /// Override the endpoint URL
    #[must_use]
    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        if endpoint_url.is_some() {
            self.endpoint_url = endpoint_url;
        }
        self
    }
}

fn parse_bool(value: &str) -> bool {
    let v_lower = value.to_lowercase();
    v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
}
