use serde::Serialize;

/// Successful refresh response: a fresh access token only
///
/// The refresh token is never rotated; the client keeps the one from the
/// original issuance until it expires.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}
