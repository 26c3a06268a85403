use crate::device_hash::device_hash;
use crate::{
    ACCESS_TOKEN_TTL_SECS, AccessClaims, AuthError, REFRESH_TOKEN_TTL_SECS, REFRESH_TOKEN_TYPE,
    RefreshClaims, Result as AuthErrorResult, TOKEN_AUDIENCE, TOKEN_ISSUER,
};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

/// Device enrollment data presented at token issuance
///
/// Ephemeral: lives for the duration of one issuance request, never stored.
#[derive(Debug, Clone)]
pub struct DeviceRegistration {
    pub device_id: String,
    pub app_version: String,
    pub device_info: Option<String>,
}

/// Result of a successful issuance
#[derive(Debug, Clone)]
pub struct IssuedTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds, for the client response
    pub expires_in: i64,
}

/// Mints access and refresh tokens bound to a device identity
pub struct TokenIssuer {
    encoding_key: EncodingKey,
}

impl TokenIssuer {
    /// Create an issuer signing with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Mint an access/refresh token pair for an enrolling device
    #[track_caller]
    pub fn issue(&self, registration: &DeviceRegistration) -> AuthErrorResult<IssuedTokens> {
        let now = chrono::Utc::now().timestamp();
        let hash = device_hash(
            &registration.device_id,
            &registration.app_version,
            registration.device_info.as_deref(),
        );

        let access = AccessClaims {
            device_id: registration.device_id.clone(),
            app_version: Some(registration.app_version.clone()),
            device_hash: hash.clone(),
            iat: now,
            exp: now + ACCESS_TOKEN_TTL_SECS,
            jti: Uuid::new_v4().to_string(),
            iss: TOKEN_ISSUER.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
        };

        let refresh = RefreshClaims {
            device_id: registration.device_id.clone(),
            device_hash: hash,
            token_type: REFRESH_TOKEN_TYPE.to_string(),
            iat: now,
            exp: now + REFRESH_TOKEN_TTL_SECS,
        };

        Ok(IssuedTokens {
            access_token: self.encode(&access)?,
            refresh_token: self.encode(&refresh)?,
            expires_in: ACCESS_TOKEN_TTL_SECS,
        })
    }

    /// Mint a fresh access token from verified refresh claims
    ///
    /// The app-version minimum is deliberately not re-checked: the device
    /// was vetted at original issuance and refresh stays lightweight. The
    /// minted token therefore carries no `appVersion` claim.
    #[track_caller]
    pub fn reissue_access(&self, device_id: &str, device_hash: &str) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();

        let claims = AccessClaims {
            device_id: device_id.to_string(),
            app_version: None,
            device_hash: device_hash.to_string(),
            iat: now,
            exp: now + ACCESS_TOKEN_TTL_SECS,
            jti: Uuid::new_v4().to_string(),
            iss: TOKEN_ISSUER.to_string(),
            aud: TOKEN_AUDIENCE.to_string(),
        };

        self.encode(&claims)
    }

    #[track_caller]
    fn encode<T: Serialize>(&self, claims: &T) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
