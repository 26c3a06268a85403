use std::cmp::Ordering;

/// Check whether `version` meets the configured minimum.
///
/// Versions are compared as numeric component tuples, not as strings:
/// "10.0.0" is newer than "2.0.0". Unparseable components count as 0, a
/// leading `v` and pre-release suffixes are tolerated.
pub fn version_at_least(version: &str, minimum: &str) -> bool {
    compare_versions(version, minimum) != Ordering::Less
}

/// Compare two semver-ish strings component-wise
fn compare_versions(a: &str, b: &str) -> Ordering {
    parse_version(a).cmp(&parse_version(b))
}

fn parse_version(v: &str) -> (u32, u32, u32) {
    let parts: Vec<&str> = v.trim_start_matches('v').split('.').collect();
    (
        component(parts.first()),
        component(parts.get(1)),
        component(parts.get(2)),
    )
}

fn component(part: Option<&&str>) -> u32 {
    part.and_then(|s| s.split('-').next()?.parse().ok())
        .unwrap_or(0)
}
