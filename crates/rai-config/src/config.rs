use crate::{
    AuthConfig, ConfigErrorResult, CorsConfig, LoggingConfig, ServerConfig, UpstreamConfig,
};

use log::info;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Loading order:
    /// 1. Load a `.env` file if present (development)
    /// 2. Start from typed defaults
    /// 3. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let _ = dotenvy::dotenv();

        let mut config = Config::default();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.cors.validate()?;
        self.upstream.validate()?;

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        info!(
            "  auth: jwt_secret {}, min_app_version {}",
            if self.auth.jwt_secret.is_some() {
                "configured (HS256)"
            } else {
                "MISSING"
            },
            self.auth.min_app_version
        );

        match self.cors.origin_list() {
            Some(origins) => info!("  cors: {} allowed origin(s)", origins.len()),
            None => info!("  cors: any origin"),
        }

        info!(
            "  upstream: {} (api_key {}, timeout {}s)",
            self.upstream.base_url,
            if self.upstream.api_key.is_some() {
                "configured"
            } else {
                "MISSING"
            },
            self.upstream.timeout_secs
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HOST", &mut self.server.host);
        Self::apply_env_parse("PORT", &mut self.server.port);

        // Auth
        Self::apply_env_option_string("JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_string("MIN_APP_VERSION", &mut self.auth.min_app_version);

        // CORS
        Self::apply_env_option_string("ALLOWED_ORIGINS", &mut self.cors.allowed_origins);

        // Upstream
        Self::apply_env_option_string("GEMINI_API_KEY", &mut self.upstream.api_key);
        Self::apply_env_string("GEMINI_BASE_URL", &mut self.upstream.base_url);
        Self::apply_env_parse("GEMINI_TIMEOUT_SECS", &mut self.upstream.timeout_secs);

        // Logging
        Self::apply_env_parse("LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
