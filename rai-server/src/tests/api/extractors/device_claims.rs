use crate::{ApiError, AppState, DeviceClaims};

use rai_auth::{DeviceRegistration, TokenIssuer};
use rai_config::Config;

use axum::{body::Body, extract::FromRequestParts, http::Request};

const SECRET: &str = "unit-test-secret-key-32-bytes-ok";

fn create_test_state() -> AppState {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(SECRET.to_string());

    AppState::from_config(&config).expect("Failed to build test state")
}

fn issue_pair() -> (String, String) {
    let issuer = TokenIssuer::with_hs256(SECRET.as_bytes());
    let tokens = issuer
        .issue(&DeviceRegistration {
            device_id: "device-abc".to_string(),
            app_version: "2.0.0".to_string(),
            device_info: None,
        })
        .expect("Failed to issue tokens");

    (tokens.access_token, tokens.refresh_token)
}

#[tokio::test]
async fn test_extractor_accepts_valid_bearer_token() {
    let state = create_test_state();
    let (access_token, _) = issue_pair();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", access_token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = DeviceClaims::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    let DeviceClaims(claims) = result.unwrap();
    assert_eq!(claims.device_id, "device-abc");
    assert_eq!(claims.app_version.as_deref(), Some("2.0.0"));
}

#[tokio::test]
async fn test_extractor_rejects_missing_header() {
    let state = create_test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = DeviceClaims::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::MissingToken { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_non_bearer_scheme() {
    let state = create_test_state();
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = DeviceClaims::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::MissingToken { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_garbage_token() {
    let state = create_test_state();
    let request = Request::builder()
        .header("Authorization", "Bearer not.a.jwt")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = DeviceClaims::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::InvalidToken { .. })));
}

#[tokio::test]
async fn test_extractor_rejects_refresh_token_as_access() {
    let state = create_test_state();
    let (_, refresh_token) = issue_pair();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", refresh_token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = DeviceClaims::from_request_parts(&mut parts, &state).await;

    // Refresh tokens carry no issuer or audience, so access validation fails
    assert!(matches!(result, Err(ApiError::InvalidToken { .. })));
}
