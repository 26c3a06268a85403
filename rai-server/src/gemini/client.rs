use crate::gemini::error::{GeminiError, Result as GeminiErrorResult};

use rai_config::UpstreamConfig;

use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use http::StatusCode;
use serde_json::Value;

/// Upstream model every proxied call is pinned to
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

/// Raw upstream reply; relay decisions happen at the handler
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Thin client for the Gemini generative language API
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Build from validated upstream configuration
    ///
    /// The request timeout is client-wide and covers the full
    /// request/response cycle, not just connection setup.
    pub fn from_config(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// POST `request_body` to `{base}/v1beta/models/{model}:{endpoint}`
    ///
    /// The API key travels as a query credential, the way the upstream
    /// expects it. Returns the raw status and body text; the caller
    /// decides how to relay them.
    pub async fn generate(
        &self,
        endpoint: &str,
        request_body: &Value,
    ) -> GeminiErrorResult<UpstreamResponse> {
        let Some(api_key) = self.api_key.as_deref() else {
            log::error!("GEMINI_API_KEY not found in environment variables");
            return Err(GeminiError::ApiKeyMissing {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let url = format!(
            "{}/v1beta/models/{}:{}",
            self.base_url, GEMINI_MODEL, endpoint
        );

        // without_url() keeps the key-bearing query string out of error
        // displays and logs.
        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(request_body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeminiError::Timeout {
                        location: ErrorLocation::from(Location::caller()),
                    }
                } else {
                    GeminiError::Request {
                        source: e.without_url(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| GeminiError::Request {
            source: e.without_url(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(UpstreamResponse { status, body })
    }
}
