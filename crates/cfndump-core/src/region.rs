//! Region selection.

use crate::types::AwsRegion;

/// Filter provider-supplied active regions against a comma-delimited
/// allow-list, preserving provider order.
///
/// An empty or whitespace-only allow-list selects all active regions.
/// Unknown names in the allow-list are ignored (they match nothing).
#[must_use]
pub fn select_regions(active: Vec<AwsRegion>, allow: &str) -> Vec<AwsRegion> {
    let targets: Vec<&str> = allow
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if targets.is_empty() {
        return active;
    }

    active
        .into_iter()
        .filter(|r| targets.contains(&r.as_str()))
        .collect()
}
