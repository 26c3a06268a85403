use crate::{ConfigError, ConfigErrorResult};

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    /// Comma-separated origin list. Unset (or "*") allows any origin.
    pub allowed_origins: Option<String>,
}

impl CorsConfig {
    /// Explicit origin list; `None` means wildcard
    pub fn origin_list(&self) -> Option<Vec<String>> {
        let raw = self.allowed_origins.as_deref()?.trim();
        if raw == "*" {
            return None;
        }

        Some(
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(origins) = self.origin_list()
            && origins.is_empty()
        {
            return Err(ConfigError::cors(
                "ALLOWED_ORIGINS must name at least one origin",
            ));
        }

        Ok(())
    }
}
