pub mod claims;
pub mod client_rate_limiter;
pub mod device_hash;
pub mod error;
pub mod jwt_validator;
pub mod rate_limit_config;
pub mod token_issuer;
pub mod version_gate;

pub use claims::{AccessClaims, RefreshClaims};
pub use client_rate_limiter::ClientRateLimiter;
pub use device_hash::device_hash;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use rate_limit_config::RateLimitConfig;
pub use token_issuer::{DeviceRegistration, IssuedTokens, TokenIssuer};
pub use version_gate::version_at_least;

/// Issuer claim stamped into every access token.
pub const TOKEN_ISSUER: &str = "reviewai-api";
/// Audience claim stamped into every access token.
pub const TOKEN_AUDIENCE: &str = "reviewai-app";
/// `type` claim marking a refresh token.
pub const REFRESH_TOKEN_TYPE: &str = "refresh";
/// Credential scheme label returned to clients.
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Access token lifetime: one hour.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;
/// Refresh token lifetime: seven days.
pub const REFRESH_TOKEN_TTL_SECS: i64 = 7 * 24 * 3600;
