//! Axum extractors for REST API authentication

use crate::{ApiError, AppState};

use rai_auth::{AccessClaims, AuthError};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use error_location::ErrorLocation;

/// Extracts verified access token claims from the request
///
/// Requires an `Authorization: Bearer <token>` header whose token passes
/// signature, expiry, issuer, and audience checks. Handlers receiving
/// this extractor never see an unverified token.
pub struct DeviceClaims(pub AccessClaims);

impl FromRequestParts<AppState> for DeviceClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                })?;

            let token =
                header_value
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| AuthError::InvalidScheme {
                        location: ErrorLocation::from(Location::caller()),
                    })?;

            let claims = state.validator.validate_access(token)?;
            log::debug!("Verified access token for device {}", claims.device_id);

            Ok(DeviceClaims(claims))
        }
    }
}
