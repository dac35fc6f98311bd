//! STS-backed caller identity.

use async_trait::async_trait;

use cfndump_core::{AccountId, CallerIdentity, ClientError};

use crate::sdk_error;

/// [`CallerIdentity`] over the STS `GetCallerIdentity` operation.
///
/// STS is a global service; the client stays on the base configuration even
/// when the catalog is re-scoped per region.
#[derive(Debug, Clone)]
pub struct StsIdentity {
    client: aws_sdk_sts::Client,
}

impl StsIdentity {
    /// Wrap an STS client.
    #[must_use]
    pub fn new(client: aws_sdk_sts::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CallerIdentity for StsIdentity {
    async fn account_id(&self) -> Result<AccountId, ClientError> {
        let resp = self
            .client
            .get_caller_identity()
            .send()
            .await
            .map_err(sdk_error)?;

        let account = resp
            .account()
            .ok_or_else(|| ClientError::message("GetCallerIdentity returned no account"))?;

        AccountId::new(account).map_err(ClientError::new)
    }
}
