//! Per-client rate limiting middleware
//!
//! Applies to every route. The client identity is the network origin:
//! forwarded-for headers first (the gateway normally sits behind the
//! platform's edge proxy), then the direct peer address.

use crate::{ApiError, AppState};

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Identity the limiter counts against, never trusted for anything else
fn client_identity(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    // X-Forwarded-For may hold a chain: "client, proxy1, proxy2"
    if let Some(forwarded) = headers.get("x-forwarded-for")
        && let Ok(value) = forwarded.to_str()
    {
        let first_hop = value.split(',').next().unwrap_or("").trim();
        if !first_hop.is_empty() {
            return first_hop.to_string();
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip")
        && let Ok(value) = real_ip.to_str()
        && !value.trim().is_empty()
    {
        return value.trim().to_string();
    }

    match peer {
        Some(addr) => addr.ip().to_string(),
        None => "unknown".to_string(),
    }
}

/// Reject requests once a client identity exhausts its window ceiling
pub async fn enforce(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0);
    let identity = client_identity(request.headers(), peer);

    state.rate_limiter.admit(&identity)?;

    Ok(next.run(request).await)
}
