mod auth_config;
mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upstream_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upstream_config::UpstreamConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MIN_APP_VERSION: &str = "1.0.0";
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = false;

const MIN_PORT: u16 = 1024;
const MIN_JWT_SECRET_LEN: usize = 32;
const MIN_UPSTREAM_TIMEOUT_SECS: u64 = 1;
const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 300;

#[cfg(test)]
mod tests;
