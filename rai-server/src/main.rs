pub mod api;
pub mod app_state;
pub mod error;
pub mod gemini;
pub mod health;
pub mod logger;
pub mod rate_limit;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::device_claims::DeviceClaims,
    proxy::{
        proxy::{ALLOWED_ENDPOINTS, dispatch},
        proxy_request::ProxyRequest,
    },
    tokens::{
        refresh_request::RefreshRequest,
        refresh_response::RefreshResponse,
        token_request::TokenRequest,
        token_response::TokenResponse,
        tokens::{issue_token, refresh_token},
    },
};

pub use crate::app_state::AppState;
pub use crate::error::ServerError;
pub use crate::gemini::client::{GEMINI_MODEL, GeminiClient, UpstreamResponse};
pub use crate::routes::build_router;

/// Request bodies above this size are rejected with 413.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

use std::error::Error;
use std::net::SocketAddr;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = rai_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, config.logging.colored)?;

    info!("Starting rai-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if config.upstream.api_key.is_none() {
        warn!("GEMINI_API_KEY not set - proxy requests will fail until configured");
    }

    // Build application state and router
    let state = AppState::from_config(&config)?;
    let app = build_router(state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown. Connect info feeds the
    // rate limiter's fallback client identity.
    info!("Server ready to accept connections");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
