pub mod api;
pub mod app_state;
pub mod error;
pub mod gemini;
pub mod health;
pub mod logger;
pub mod rate_limit;
pub mod routes;

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
