//! Service-client seams.
//!
//! Each consumed service is a trait so tests (and alternative providers) can
//! substitute their own implementations. The AWS SDK implementations live in
//! `cfndump-aws`.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::types::{AccountId, StackPage};

/// The deployed-stack catalog: paged listing plus per-stack template fetch.
///
/// Both operations belong to the same provider service, so they share a
/// trait. `list_stacks` returns one page per call; callers follow
/// `next_token` until it is `None`.
#[async_trait]
pub trait StackCatalog: Send + Sync {
    /// Fetch one page of deployed stacks.
    async fn list_stacks(&self, next_token: Option<String>) -> Result<StackPage, ClientError>;

    /// Fetch the raw template body for one stack. One request, no retry.
    async fn fetch_template(&self, stack_name: &str) -> Result<String, ClientError>;
}

/// Resolves the caller's account identity.
#[async_trait]
pub trait CallerIdentity: Send + Sync {
    /// The account ID the current credentials belong to.
    async fn account_id(&self) -> Result<AccountId, ClientError>;
}
