use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Access token claims - matches the mobile client's token contract
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    /// Client-supplied device identifier
    pub device_id: String,
    /// App version at original issuance; absent on refresh-minted tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    /// Digest binding the token to the device fingerprint
    pub device_hash: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Unique token identifier (replay/collision prevention)
    pub jti: String,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

impl AccessClaims {
    /// Validate the device binding after JWT signature verification
    ///
    /// A token can be signature-valid yet carry empty identity fields;
    /// such a token must never reach the upstream provider.
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.device_id.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "deviceId".to_string(),
                message: "deviceId cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.device_hash.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "deviceHash".to_string(),
                message: "deviceHash cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

/// Refresh token claims
///
/// Deliberately minimal: no issuer/audience, only the device binding and a
/// `type` marker distinguishing it from an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshClaims {
    /// Client-supplied device identifier
    pub device_id: String,
    /// Digest binding the token to the device fingerprint
    pub device_hash: String,
    /// Always "refresh"
    #[serde(rename = "type")]
    pub token_type: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}
