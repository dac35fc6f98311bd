//! Deterministic output path construction.

use crate::types::{AccountId, AwsRegion};

/// Compose the output path for one stack's template.
///
/// Pure string composition:
/// `{output_dir}/{account_id}.{region}.{stack_name}.cfn.{ext}`. Identical
/// inputs always yield the identical path. No filesystem access, and no
/// escaping of `stack_name`: provider-enforced stack naming
/// (`[a-zA-Z][-a-zA-Z0-9]*`) already excludes path-hazard characters.
#[must_use]
pub fn template_path(
    output_dir: &str,
    account_id: &AccountId,
    region: &AwsRegion,
    stack_name: &str,
    ext: &str,
) -> String {
    format!("{output_dir}/{account_id}.{region}.{stack_name}.cfn.{ext}")
}
