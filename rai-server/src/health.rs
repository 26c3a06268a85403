use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

/// GET /health - liveness check for the hosting platform
pub async fn health_check() -> Response {
    let health = json!({
        "status": "OK",
        "message": "ReviewAI API Proxy Server is running",
    });

    (StatusCode::OK, Json(health)).into_response()
}
