use crate::{AppState, MAX_BODY_BYTES, dispatch, health, issue_token, rate_limit, refresh_token};

use rai_config::CorsConfig;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors);

    Router::new()
        // Token issuance and refresh
        .route("/api/auth/token", post(issue_token))
        .route("/api/auth/refresh", post(refresh_token))
        // Authenticated upstream proxy
        .route("/api/gemini-proxy", post(dispatch))
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Request size ceiling
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Per-client rate limiting across every route
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::enforce,
        ))
        // Add shared state
        .with_state(state)
        // CORS outermost so preflights never count against the limiter
        .layer(cors)
}

/// CORS policy from configuration
///
/// With an explicit origin list the browser may send credentials; the
/// wildcard default cannot carry credentials (browsers reject that
/// combination), so it is never produced.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-app-token"),
        ]);

    match config.origin_list() {
        Some(origins) => {
            let parsed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        log::warn!("Ignoring unparseable CORS origin: {}", origin);
                        None
                    }
                })
                .collect();

            layer
                .allow_origin(AllowOrigin::list(parsed))
                .allow_credentials(true)
        }
        None => layer.allow_origin(Any),
    }
}
