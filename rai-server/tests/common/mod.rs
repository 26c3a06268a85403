#![allow(dead_code)]

//! Test infrastructure for rai-server API tests

use rai_auth::{
    AccessClaims, ClientRateLimiter, DeviceRegistration, IssuedTokens, JwtValidator,
    RateLimitConfig, TOKEN_AUDIENCE, TOKEN_ISSUER, TokenIssuer, device_hash,
};
use rai_config::{Config, UpstreamConfig};
use rai_server::{AppState, GeminiClient};

use std::sync::Arc;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;

pub const SECRET: &str = "integration-test-secret-32-bytes";

/// Knobs a test can turn without repeating the whole state setup
pub struct TestStateBuilder {
    min_app_version: String,
    rate_limit: RateLimitConfig,
    upstream_base_url: String,
    upstream_timeout_secs: u64,
    api_key: Option<String>,
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self {
            min_app_version: "1.0.0".to_string(),
            rate_limit: RateLimitConfig::default(),
            upstream_base_url: "http://127.0.0.1:9".to_string(),
            upstream_timeout_secs: 5,
            api_key: Some("test-key".to_string()),
        }
    }
}

impl TestStateBuilder {
    pub fn min_app_version(mut self, version: &str) -> Self {
        self.min_app_version = version.to_string();
        self
    }

    pub fn rate_limit(mut self, max_requests: u32, window_secs: u64) -> Self {
        self.rate_limit = RateLimitConfig {
            max_requests,
            window_secs,
        };
        self
    }

    pub fn upstream_base_url(mut self, url: &str) -> Self {
        self.upstream_base_url = url.to_string();
        self
    }

    pub fn upstream_timeout_secs(mut self, secs: u64) -> Self {
        self.upstream_timeout_secs = secs;
        self
    }

    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    pub fn build(self) -> AppState {
        let upstream = UpstreamConfig {
            api_key: self.api_key,
            base_url: self.upstream_base_url,
            timeout_secs: self.upstream_timeout_secs,
        };

        let config = Config::default();

        AppState {
            issuer: Arc::new(TokenIssuer::with_hs256(SECRET.as_bytes())),
            validator: Arc::new(JwtValidator::with_hs256(SECRET.as_bytes())),
            rate_limiter: Arc::new(ClientRateLimiter::new(self.rate_limit)),
            gemini: Arc::new(
                GeminiClient::from_config(&upstream).expect("Failed to build upstream client"),
            ),
            min_app_version: self.min_app_version,
            cors: config.cors,
        }
    }
}

/// Default state: permissive version gate, default rate limit, dead upstream
pub fn create_test_state() -> AppState {
    TestStateBuilder::default().build()
}

/// Issue a token pair through the production issuer
pub fn issue_token_pair(state: &AppState, device_id: &str) -> IssuedTokens {
    state
        .issuer
        .issue(&DeviceRegistration {
            device_id: device_id.to_string(),
            app_version: "2.0.0".to_string(),
            device_info: None,
        })
        .expect("Failed to issue tokens")
}

/// Issue a valid access token through the production issuer
pub fn issue_access_token(state: &AppState, device_id: &str) -> String {
    issue_token_pair(state, device_id).access_token
}

fn encode_claims<T: Serialize>(claims: &T) -> String {
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("Failed to encode test token")
}

/// Hand-build an access token with full control over every claim
pub fn forge_access_token(device_id: &str, device_hash_value: &str, iat: i64, exp: i64) -> String {
    encode_claims(&AccessClaims {
        device_id: device_id.to_string(),
        app_version: Some("2.0.0".to_string()),
        device_hash: device_hash_value.to_string(),
        iat,
        exp,
        jti: "test-jti".to_string(),
        iss: TOKEN_ISSUER.to_string(),
        aud: TOKEN_AUDIENCE.to_string(),
    })
}

/// An access token that expired an hour ago
pub fn expired_access_token(device_id: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let hash = device_hash(device_id, "2.0.0", None);
    forge_access_token(device_id, &hash, now - 7200, now - 3600)
}

/// A signature-valid access token missing its device binding
pub fn empty_binding_access_token() -> String {
    let now = chrono::Utc::now().timestamp();
    forge_access_token("", "", now, now + 3600)
}
