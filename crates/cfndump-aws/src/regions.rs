//! Active-region enumeration.

use tracing::debug;

use cfndump_core::{AwsRegion, ClientError};

use crate::sdk_error;

/// Enumerate the regions enabled for the account via EC2 `DescribeRegions`.
///
/// Returns regions in provider order. Entries without a region name are
/// skipped rather than failing the whole enumeration.
pub async fn active_regions(
    client: &aws_sdk_ec2::Client,
) -> Result<Vec<AwsRegion>, ClientError> {
    let resp = client.describe_regions().send().await.map_err(sdk_error)?;

    let regions: Vec<AwsRegion> = resp
        .regions()
        .iter()
        .filter_map(|r| r.region_name())
        .map(AwsRegion::new)
        .collect();

    debug!(count = regions.len(), "enumerated active regions");
    Ok(regions)
}
