use serde::Deserialize;
use serde_json::Value;

/// POST /api/gemini-proxy request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRequest {
    /// Upstream operation name; must be allow-listed
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Opaque payload forwarded verbatim to the upstream
    #[serde(default)]
    pub request_body: Option<Value>,
}
