//! Token issuance and refresh handlers
//!
//! Both endpoints are anonymous: a device proves nothing beyond knowing
//! its own identifiers, so issuance is deliberately cheap and stateless.

use crate::{
    ApiError, ApiResult, AppState, RefreshRequest, RefreshResponse, TokenRequest, TokenResponse,
};

use rai_auth::{ACCESS_TOKEN_TTL_SECS, BEARER_TOKEN_TYPE, DeviceRegistration, version_at_least};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/token
///
/// Issue an access/refresh token pair to an enrolling device.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> ApiResult<Json<TokenResponse>> {
    // Empty strings count as missing, matching the client contract
    let device_id = request.device_id.filter(|v| !v.is_empty());
    let app_version = request.app_version.filter(|v| !v.is_empty());

    let (Some(device_id), Some(app_version)) = (device_id, app_version) else {
        return Err(ApiError::MissingFields {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    if !version_at_least(&app_version, &state.min_app_version) {
        return Err(ApiError::VersionTooOld {
            minimum: state.min_app_version.clone(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let registration = DeviceRegistration {
        device_id,
        app_version,
        device_info: request.device_info,
    };
    let tokens = state.issuer.issue(&registration)?;

    log::debug!("Issued token pair for device {}", registration.device_id);

    Ok(Json(TokenResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        expires_in: tokens.expires_in,
        token_type: BEARER_TOKEN_TYPE.to_string(),
    }))
}

/// POST /api/auth/refresh
///
/// Mint a fresh access token from a valid refresh token. Any verification
/// failure (bad signature, expired, wrong token type) collapses into the
/// same 401 so callers learn nothing about why a forged token failed.
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> ApiResult<Json<RefreshResponse>> {
    let Some(token) = request.refresh_token.filter(|v| !v.is_empty()) else {
        return Err(ApiError::MissingRefreshToken {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let claims = state.validator.validate_refresh(&token).map_err(|e| {
        log::warn!("Refresh token rejected: {}", e);
        ApiError::InvalidRefreshToken {
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    let access_token = state
        .issuer
        .reissue_access(&claims.device_id, &claims.device_hash)?;

    log::debug!("Refreshed access token for device {}", claims.device_id);

    Ok(Json(RefreshResponse {
        access_token,
        expires_in: ACCESS_TOKEN_TTL_SECS,
        token_type: BEARER_TOKEN_TYPE.to_string(),
    }))
}
