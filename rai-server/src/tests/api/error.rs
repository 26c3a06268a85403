use crate::ApiError;
use crate::gemini::error::GeminiError;

use rai_auth::AuthError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

fn here() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_missing_fields_returns_400_with_contract_body() {
    let (status, json) = body_json(ApiError::MissingFields { location: here() }).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Missing required fields");
    assert_eq!(json["message"], "deviceId and appVersion are required");
}

#[tokio::test]
async fn test_version_too_old_names_minimum() {
    let (status, json) = body_json(ApiError::VersionTooOld {
        minimum: "2.0.0".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "App version too old");
    assert_eq!(json["message"], "Minimum app version required: 2.0.0");
}

#[tokio::test]
async fn test_missing_refresh_token_returns_400_without_message() {
    let (status, json) = body_json(ApiError::MissingRefreshToken { location: here() }).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Refresh token is required");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_invalid_refresh_token_returns_401() {
    let (status, json) = body_json(ApiError::InvalidRefreshToken { location: here() }).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid refresh token");
    assert_eq!(json["message"], "Please re-authenticate");
}

#[tokio::test]
async fn test_missing_token_returns_401() {
    let (status, json) = body_json(ApiError::MissingToken { location: here() }).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "No valid token provided");
    assert_eq!(
        json["message"],
        "Authorization header with Bearer token is required"
    );
}

#[tokio::test]
async fn test_token_expired_returns_401() {
    let (status, json) = body_json(ApiError::TokenExpired { location: here() }).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Token expired");
    assert_eq!(json["message"], "Please refresh your token");
}

#[tokio::test]
async fn test_invalid_token_returns_401() {
    let (status, json) = body_json(ApiError::InvalidToken { location: here() }).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid token");
    assert_eq!(json["message"], "Token verification failed");
}

#[tokio::test]
async fn test_invalid_token_payload_returns_401() {
    let (status, json) = body_json(ApiError::InvalidTokenPayload { location: here() }).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Invalid token payload");
    assert_eq!(json["message"], "Token missing required information");
}

#[tokio::test]
async fn test_invalid_endpoint_returns_400_without_message() {
    let (status, json) = body_json(ApiError::InvalidEndpoint {
        endpoint: "deleteEverything".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid endpoint");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_rate_limited_returns_429() {
    let (status, json) = body_json(ApiError::RateLimited { location: here() }).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"], "Too many requests");
    assert_eq!(json["message"], "Rate limit exceeded. Please try again later.");
}

#[tokio::test]
async fn test_api_key_missing_returns_500() {
    let (status, json) = body_json(ApiError::ApiKeyMissing { location: here() }).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "API key not configured");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn test_upstream_error_relays_status_and_details() {
    let (status, json) = body_json(ApiError::Upstream {
        status: StatusCode::SERVICE_UNAVAILABLE,
        details: "model overloaded".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "Gemini API error");
    assert_eq!(json["details"], "model overloaded");
}

#[tokio::test]
async fn test_upstream_timeout_returns_504() {
    let (status, json) = body_json(ApiError::UpstreamTimeout { location: here() }).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(json["error"], "Gemini API timeout");
    assert_eq!(json["details"], "The upstream request timed out");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::Internal {
        message: "Failed to generate authentication token".into(),
        location: here(),
    })
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
    assert_eq!(json["message"], "Failed to generate authentication token");
}

#[test]
fn test_auth_missing_header_converts_to_missing_token() {
    let auth_err = AuthError::MissingHeader { location: here() };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::MissingToken { .. }));
}

#[test]
fn test_auth_invalid_scheme_converts_to_missing_token() {
    let auth_err = AuthError::InvalidScheme { location: here() };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::MissingToken { .. }));
}

#[test]
fn test_auth_expired_converts_to_token_expired() {
    let auth_err = AuthError::TokenExpired { location: here() };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::TokenExpired { .. }));
}

#[test]
fn test_auth_invalid_claim_converts_to_invalid_token_payload() {
    let auth_err = AuthError::InvalidClaim {
        claim: "deviceId".into(),
        message: "must not be empty".into(),
        location: here(),
    };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::InvalidTokenPayload { .. }));
}

#[test]
fn test_auth_rate_limit_converts_to_rate_limited() {
    let auth_err = AuthError::RateLimitExceeded {
        limit: 100,
        window_secs: 900,
        location: here(),
    };
    let api_err: ApiError = auth_err.into();

    assert!(matches!(api_err, ApiError::RateLimited { .. }));
}

#[test]
fn test_gemini_key_missing_converts_to_api_key_missing() {
    let gemini_err = GeminiError::ApiKeyMissing { location: here() };
    let api_err: ApiError = gemini_err.into();

    assert!(matches!(api_err, ApiError::ApiKeyMissing { .. }));
}

#[test]
fn test_gemini_timeout_converts_to_upstream_timeout() {
    let gemini_err = GeminiError::Timeout { location: here() };
    let api_err: ApiError = gemini_err.into();

    assert!(matches!(api_err, ApiError::UpstreamTimeout { .. }));
}
