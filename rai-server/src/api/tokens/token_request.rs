use serde::Deserialize;

/// POST /api/auth/token request body
///
/// Every field is optional at the deserializer so the handler can answer
/// missing fields with the contract's own 400 body instead of a generic
/// rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    /// Client-generated device identifier (required)
    #[serde(default)]
    pub device_id: Option<String>,

    /// Installed app version, e.g. "2.1.0" (required)
    #[serde(default)]
    pub app_version: Option<String>,

    /// Optional free-form device fingerprint
    #[serde(default)]
    pub device_info: Option<String>,
}
