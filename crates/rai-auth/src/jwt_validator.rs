use crate::{
    AccessClaims, AuthError, REFRESH_TOKEN_TYPE, RefreshClaims, Result as AuthErrorResult,
    TOKEN_AUDIENCE, TOKEN_ISSUER,
};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Validates presented JWTs against signature, expiry, issuer, and audience
pub struct JwtValidator {
    decoding_key: DecodingKey,
    access_validation: Validation,
    refresh_validation: Validation,
}

impl JwtValidator {
    /// Create a validator with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut access_validation = Validation::new(Algorithm::HS256);
        access_validation.validate_exp = true;
        access_validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        access_validation.set_issuer(&[TOKEN_ISSUER]);
        access_validation.set_audience(&[TOKEN_AUDIENCE]);
        access_validation.leeway = 0; // strict expiry, no clock skew allowance

        // Refresh tokens carry no issuer/audience claims
        let mut refresh_validation = Validation::new(Algorithm::HS256);
        refresh_validation.validate_exp = true;
        refresh_validation.validate_aud = false;
        refresh_validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            access_validation,
            refresh_validation,
        }
    }

    /// Validate an access token and return its claims
    #[track_caller]
    pub fn validate_access(&self, token: &str) -> AuthErrorResult<AccessClaims> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &self.access_validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate a refresh token: signature and expiry, then the `type` marker
    #[track_caller]
    pub fn validate_refresh(&self, token: &str) -> AuthErrorResult<RefreshClaims> {
        let token_data =
            decode::<RefreshClaims>(token, &self.decoding_key, &self.refresh_validation).map_err(
                |e| {
                    use jsonwebtoken::errors::ErrorKind;
                    match e.kind() {
                        ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                            location: ErrorLocation::from(Location::caller()),
                        },
                        _ => AuthError::JwtDecode {
                            source: e,
                            location: ErrorLocation::from(Location::caller()),
                        },
                    }
                },
            )?;

        if token_data.claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(AuthError::InvalidClaim {
                claim: "type".to_string(),
                message: format!("expected a '{}' token", REFRESH_TOKEN_TYPE),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(token_data.claims)
    }
}
