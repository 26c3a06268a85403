//! Gemini proxy handler
//!
//! The one privileged operation this gateway performs: forwarding a
//! verified device's request to the Gemini API with the server-held key
//! attached. The client never sees the key, only the relayed response.

use crate::{ApiError, ApiResult, AppState, DeviceClaims, ProxyRequest};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::Value;

/// Upstream operations the gateway is willing to forward
pub const ALLOWED_ENDPOINTS: [&str; 5] = [
    "generateContent",
    "generateReviews",
    "validateImage",
    "buildPersonalizedRecommendationPrompt",
    "buildGenericRecommendationPrompt",
];

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/gemini-proxy
///
/// Forward an allow-listed operation to the upstream. The upstream's
/// status and body are relayed as-is on success; non-success bodies are
/// wrapped so the client sees a consistent error shape.
pub async fn dispatch(
    State(state): State<AppState>,
    DeviceClaims(claims): DeviceClaims,
    Json(request): Json<ProxyRequest>,
) -> ApiResult<Response> {
    // Signature-valid tokens can still carry empty device fields
    claims.validate()?;

    let endpoint = request.endpoint.unwrap_or_default();
    if !ALLOWED_ENDPOINTS.contains(&endpoint.as_str()) {
        return Err(ApiError::InvalidEndpoint {
            endpoint,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let request_body = request.request_body.unwrap_or(Value::Null);

    log::debug!("Proxying {} for device {}", endpoint, claims.device_id);

    let upstream = state.gemini.generate(&endpoint, &request_body).await?;

    if !upstream.status.is_success() {
        log::error!("Gemini API error: {} {}", upstream.status, upstream.body);
        return Err(ApiError::Upstream {
            status: upstream.status,
            details: upstream.body,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let payload: Value = serde_json::from_str(&upstream.body).map_err(|e| {
        log::error!("Upstream returned unparseable JSON: {}", e);
        ApiError::Internal {
            message: "Invalid upstream response".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok((upstream.status, Json(payload)).into_response())
}
