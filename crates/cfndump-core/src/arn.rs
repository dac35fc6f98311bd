//! Stack ARN parsing.
//!
//! Stack ARNs look like
//! `arn:aws:cloudformation:us-west-2:123456789012:stack/my-stack/guid`.
//! The region encoded here is authoritative for file naming: it is always
//! taken from the ARN, never passed alongside the descriptor.

use std::fmt;
use std::str::FromStr;

use crate::types::AwsRegion;

/// The ARN string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed ARN: {arn}")]
pub struct ArnError {
    /// The offending input.
    pub arn: String,
}

/// A parsed AWS resource name.
///
/// An ARN has six colon-separated sections; the resource section may itself
/// contain colons and is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackArn {
    /// Partition (`aws`, `aws-cn`, `aws-us-gov`).
    pub partition: String,
    /// Service namespace (`cloudformation` for stacks).
    pub service: String,
    /// Region the resource lives in.
    pub region: AwsRegion,
    /// Owning account ID section, verbatim.
    pub account_id: String,
    /// Resource section, verbatim.
    pub resource: String,
}

impl FromStr for StackArn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sections = s.splitn(6, ':');
        let err = || ArnError { arn: s.to_owned() };

        if sections.next() != Some("arn") {
            return Err(err());
        }
        let partition = sections.next().ok_or_else(err)?;
        let service = sections.next().ok_or_else(err)?;
        let region = sections.next().ok_or_else(err)?;
        let account_id = sections.next().ok_or_else(err)?;
        let resource = sections.next().ok_or_else(err)?;

        Ok(Self {
            partition: partition.to_owned(),
            service: service.to_owned(),
            region: AwsRegion::new(region),
            account_id: account_id.to_owned(),
            resource: resource.to_owned(),
        })
    }
}

impl fmt::Display for StackArn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}
