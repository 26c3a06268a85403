//! REST API error types
//!
//! These errors render the gateway's client-facing JSON contract: a flat
//! `{error, message?, details?}` body with the HTTP status the mobile
//! client switches on.

use crate::gemini::error::GeminiError;

use rai_auth::AuthError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
///
/// `message` is client guidance; `details` carries relayed upstream text.
/// Absent fields are omitted, not null.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required issuance fields absent or empty (400)
    #[error("Missing deviceId or appVersion {location}")]
    MissingFields { location: ErrorLocation },

    /// App version below the configured minimum (400)
    #[error("App version below minimum {minimum} {location}")]
    VersionTooOld {
        minimum: String,
        location: ErrorLocation,
    },

    /// Refresh endpoint called without a refresh token (400)
    #[error("Refresh token missing from request {location}")]
    MissingRefreshToken { location: ErrorLocation },

    /// Refresh token failed verification or carried the wrong type (401)
    #[error("Refresh token rejected {location}")]
    InvalidRefreshToken { location: ErrorLocation },

    /// No Authorization header or no Bearer scheme (401)
    #[error("No bearer token presented {location}")]
    MissingToken { location: ErrorLocation },

    /// Access token past its expiry (401)
    #[error("Access token expired {location}")]
    TokenExpired { location: ErrorLocation },

    /// Signature, issuer, or audience check failed (401)
    #[error("Access token rejected {location}")]
    InvalidToken { location: ErrorLocation },

    /// Signature-valid token missing its device binding (401)
    #[error("Token payload missing device binding {location}")]
    InvalidTokenPayload { location: ErrorLocation },

    /// Requested upstream operation not allow-listed (400)
    #[error("Endpoint not allowed: '{endpoint}' {location}")]
    InvalidEndpoint {
        endpoint: String,
        location: ErrorLocation,
    },

    /// Client identity exceeded the request ceiling (429)
    #[error("Rate limit exceeded {location}")]
    RateLimited { location: ErrorLocation },

    /// Upstream API key absent from the environment (500)
    #[error("Gemini API key not configured {location}")]
    ApiKeyMissing { location: ErrorLocation },

    /// Upstream replied non-success; relayed with its own status
    #[error("Gemini API error: status {status} {location}")]
    Upstream {
        status: StatusCode,
        details: String,
        location: ErrorLocation,
    },

    /// Upstream call exceeded the configured timeout (504)
    #[error("Gemini API timeout {location}")]
    UpstreamTimeout { location: ErrorLocation },

    /// Anything unexpected (500); `message` stays generic
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// True when the failure is on our side of the contract
    fn is_server_side(&self) -> bool {
        matches!(
            self,
            ApiError::ApiKeyMissing { .. }
                | ApiError::Upstream { .. }
                | ApiError::UpstreamTimeout { .. }
                | ApiError::Internal { .. }
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client mistakes are routine noise; our failures are not
        if self.is_server_side() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let (status, body) = match self {
            ApiError::MissingFields { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error: "Missing required fields".into(),
                    message: Some("deviceId and appVersion are required".into()),
                    details: None,
                },
            ),
            ApiError::VersionTooOld { minimum, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error: "App version too old".into(),
                    message: Some(format!("Minimum app version required: {}", minimum)),
                    details: None,
                },
            ),
            ApiError::MissingRefreshToken { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error: "Refresh token is required".into(),
                    message: None,
                    details: None,
                },
            ),
            ApiError::InvalidRefreshToken { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "Invalid refresh token".into(),
                    message: Some("Please re-authenticate".into()),
                    details: None,
                },
            ),
            ApiError::MissingToken { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "No valid token provided".into(),
                    message: Some("Authorization header with Bearer token is required".into()),
                    details: None,
                },
            ),
            ApiError::TokenExpired { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "Token expired".into(),
                    message: Some("Please refresh your token".into()),
                    details: None,
                },
            ),
            ApiError::InvalidToken { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "Invalid token".into(),
                    message: Some("Token verification failed".into()),
                    details: None,
                },
            ),
            ApiError::InvalidTokenPayload { .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    error: "Invalid token payload".into(),
                    message: Some("Token missing required information".into()),
                    details: None,
                },
            ),
            ApiError::InvalidEndpoint { .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error: "Invalid endpoint".into(),
                    message: None,
                    details: None,
                },
            ),
            ApiError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                ApiErrorBody {
                    error: "Too many requests".into(),
                    message: Some("Rate limit exceeded. Please try again later.".into()),
                    details: None,
                },
            ),
            ApiError::ApiKeyMissing { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: "API key not configured".into(),
                    message: None,
                    details: None,
                },
            ),
            ApiError::Upstream {
                status, details, ..
            } => (
                status,
                ApiErrorBody {
                    error: "Gemini API error".into(),
                    message: None,
                    details: Some(details),
                },
            ),
            ApiError::UpstreamTimeout { .. } => (
                StatusCode::GATEWAY_TIMEOUT,
                ApiErrorBody {
                    error: "Gemini API timeout".into(),
                    message: None,
                    details: Some("The upstream request timed out".into()),
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    error: "Internal server error".into(),
                    message: Some(message),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert auth layer errors to API errors
///
/// Refresh verification failures are NOT routed through here; the refresh
/// handler folds them all into `InvalidRefreshToken` itself.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingHeader { .. } | AuthError::InvalidScheme { .. } => {
                ApiError::MissingToken {
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::TokenExpired { .. } => ApiError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::JwtDecode { .. } => ApiError::InvalidToken {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::InvalidClaim { .. } => ApiError::InvalidTokenPayload {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::RateLimitExceeded { .. } => ApiError::RateLimited {
                location: ErrorLocation::from(Location::caller()),
            },
            AuthError::JwtEncode { source, .. } => {
                // Signing failures stay server-side; clients get a stable string
                log::error!("JWT encode failed: {}", source);
                ApiError::Internal {
                    message: "Failed to generate authentication token".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert upstream client errors to API errors
impl From<GeminiError> for ApiError {
    #[track_caller]
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::ApiKeyMissing { .. } => ApiError::ApiKeyMissing {
                location: ErrorLocation::from(Location::caller()),
            },
            GeminiError::Timeout { .. } => ApiError::UpstreamTimeout {
                location: ErrorLocation::from(Location::caller()),
            },
            GeminiError::Request { source, .. } => {
                log::error!("Upstream request failed: {}", source);
                ApiError::Internal {
                    message: "Upstream request failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
