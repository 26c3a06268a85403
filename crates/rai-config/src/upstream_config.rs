use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UPSTREAM_BASE_URL, DEFAULT_UPSTREAM_TIMEOUT_SECS,
    MAX_UPSTREAM_TIMEOUT_SECS, MIN_UPSTREAM_TIMEOUT_SECS,
};

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Provider API key. The server boots without one; proxy calls fail
    /// with a configuration error until it is set.
    pub api_key: Option<String>,
    /// Provider base URL (overridable for tests)
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_UPSTREAM_BASE_URL),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::upstream(format!(
                "GEMINI_BASE_URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_UPSTREAM_TIMEOUT_SECS
            || self.timeout_secs > MAX_UPSTREAM_TIMEOUT_SECS
        {
            return Err(ConfigError::upstream(format!(
                "GEMINI_TIMEOUT_SECS must be {}-{}, got {}",
                MIN_UPSTREAM_TIMEOUT_SECS, MAX_UPSTREAM_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }
}
