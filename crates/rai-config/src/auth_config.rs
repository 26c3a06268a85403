use crate::{ConfigError, ConfigErrorResult, DEFAULT_MIN_APP_VERSION, MIN_JWT_SECRET_LEN};

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 signing secret. Required: a generated fallback would silently
    /// invalidate every outstanding token on restart.
    pub jwt_secret: Option<String>,
    /// Minimum app version accepted at token issuance
    pub min_app_version: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            min_app_version: String::from(DEFAULT_MIN_APP_VERSION),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(ref secret) = self.jwt_secret else {
            return Err(ConfigError::auth(
                "JWT_SECRET is required for token signing",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::auth(format!(
                "JWT_SECRET must be at least {} characters, got {}",
                MIN_JWT_SECRET_LEN,
                secret.len()
            )));
        }

        if self.min_app_version.trim().is_empty() {
            return Err(ConfigError::auth("MIN_APP_VERSION cannot be empty"));
        }

        Ok(())
    }

    /// The validated signing secret
    ///
    /// Only callable after `validate()` has passed.
    pub fn secret(&self) -> ConfigErrorResult<&str> {
        self.jwt_secret
            .as_deref()
            .ok_or_else(|| ConfigError::auth("JWT_SECRET is required for token signing"))
    }
}
