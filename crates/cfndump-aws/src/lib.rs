//! AWS SDK implementations of the cfndump client seams.
//!
//! Three services are consumed: CloudFormation (stack listing + template
//! fetch), STS (caller identity), and EC2 (active-region enumeration). Each
//! adapter wraps the corresponding SDK client and maps its responses into
//! `cfndump-core` types; provider errors are propagated verbatim inside
//! [`cfndump_core::ClientError`].

mod cloudformation;
mod regions;
mod sts;

pub use cloudformation::CloudFormationCatalog;
pub use regions::active_regions;
pub use sts::StsIdentity;

use cfndump_core::ClientError;

/// Wrap an SDK error into a [`ClientError`], keeping it verbatim.
pub(crate) fn sdk_error<E>(err: E) -> ClientError
where
    E: std::error::Error + Send + Sync + 'static,
{
    ClientError::new(err)
}
