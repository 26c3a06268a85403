
use std::env;

/// Every variable the gateway reads, for test isolation
const GATEWAY_ENV_VARS: [&str; 10] = [
    "HOST",
    "PORT",
    "JWT_SECRET",
    "MIN_APP_VERSION",
    "ALLOWED_ORIGINS",
    "GEMINI_API_KEY",
    "GEMINI_BASE_URL",
    "GEMINI_TIMEOUT_SECS",
    "LOG_LEVEL",
    "LOG_COLORED",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clear every gateway variable so a test starts from pure defaults
pub(crate) fn clear_gateway_env() -> Vec<EnvGuard> {
    GATEWAY_ENV_VARS
        .iter()
        .map(|&var| EnvGuard::remove(var))
        .collect()
}
