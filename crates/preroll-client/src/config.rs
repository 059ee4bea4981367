//! Client configuration
//!
//! Defaults suit a generation service running locally. Environment
//! variables overlay the defaults; command-line flags overlay both.

use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable for the endpoint base URL
pub const ENV_API_BASE: &str = "PREROLL_API_BASE";
/// Environment variable for the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "PREROLL_TIMEOUT_SECS";
/// Environment variable for the composed prompt limit
pub const ENV_MAX_PROMPT_CHARS: &str = "PREROLL_MAX_PROMPT_CHARS";

/// Generation client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the generation service
    pub api_base: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum length of the composed prompt, in characters
    pub max_prompt_chars: usize,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `PREROLL_*` environment variables
    ///
    /// # Errors
    /// Returns `ClientError::Config` when a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup`
    ///
    /// # Errors
    /// Returns `ClientError::Config` when a numeric value does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            config.api_base = base.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_PROMPT_CHARS) {
            config.max_prompt_chars = parse_number(ENV_MAX_PROMPT_CHARS, &raw)?;
        }
        Ok(config)
    }

    /// With base URL
    #[inline]
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// With timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// With prompt limit
    #[inline]
    #[must_use]
    pub fn with_max_prompt_chars(mut self, max: usize) -> Self {
        self.max_prompt_chars = max;
        self
    }

    /// Request timeout as a duration
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// URL of the generate endpoint
    #[must_use]
    pub fn generate_url(&self) -> String {
        format!("{}/generate", self.api_base.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 60,
            max_prompt_chars: 3000,
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| ClientError::Config(format!("{name} must be a non-negative integer, got '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert_eq!(config.api_base, "http://127.0.0.1:8000");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.max_prompt_chars, 3000);
        assert_eq!(config.generate_url(), "http://127.0.0.1:8000/generate");
    }

    #[test]
    fn environment_overlay() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_API_BASE, "https://studio.example/api/"),
            (ENV_TIMEOUT_SECS, " 15 "),
        ]))
        .expect("valid config");
        assert_eq!(config.generate_url(), "https://studio.example/api/generate");
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.max_prompt_chars, 3000);
    }

    #[test]
    fn invalid_number_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[(ENV_MAX_PROMPT_CHARS, "lots")]))
            .expect_err("invalid");
        assert!(matches!(err, ClientError::Config(msg) if msg.contains(ENV_MAX_PROMPT_CHARS)));
    }

    #[test]
    fn builders_override() {
        let config = ClientConfig::new()
            .with_api_base("http://localhost:9000")
            .with_timeout_secs(5)
            .with_max_prompt_chars(100);
        assert_eq!(config.generate_url(), "http://localhost:9000/generate");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.max_prompt_chars, 100);
    }
}
