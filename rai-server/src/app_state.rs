use crate::error::Result as ServerErrorResult;
use crate::gemini::client::GeminiClient;

use rai_auth::{ClientRateLimiter, JwtValidator, RateLimitConfig, TokenIssuer};
use rai_config::{Config, CorsConfig};

use std::sync::Arc;

/// Shared state handed to every handler
///
/// Everything in here is either immutable after startup or internally
/// synchronized (the rate limiter), so cloning per-request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<JwtValidator>,
    pub rate_limiter: Arc<ClientRateLimiter>,
    pub gemini: Arc<GeminiClient>,
    /// Minimum app version accepted at token issuance
    pub min_app_version: String,
    pub cors: CorsConfig,
}

impl AppState {
    /// Build state from validated configuration
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let secret = config.auth.secret()?;

        Ok(Self {
            issuer: Arc::new(TokenIssuer::with_hs256(secret.as_bytes())),
            validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            rate_limiter: Arc::new(ClientRateLimiter::new(RateLimitConfig::default())),
            gemini: Arc::new(GeminiClient::from_config(&config.upstream)?),
            min_app_version: config.auth.min_app_version.clone(),
            cors: config.cors.clone(),
        })
    }
}
