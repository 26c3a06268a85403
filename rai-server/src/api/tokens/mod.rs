pub mod refresh_request;
pub mod refresh_response;
pub mod token_request;
pub mod token_response;
#[allow(clippy::module_inception)]
pub mod tokens;
