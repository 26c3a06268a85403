use sha2::{Digest, Sha256};

/// Compute the digest binding a credential to a device fingerprint.
///
/// Absent `device_info` contributes the empty string, so enrollments with
/// and without device metadata hash consistently.
pub fn device_hash(device_id: &str, app_version: &str, device_info: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!(
        "{}-{}-{}",
        device_id,
        app_version,
        device_info.unwrap_or_default()
    ));
    hex::encode(hasher.finalize())
}
