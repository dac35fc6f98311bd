//! CloudFormation-backed stack catalog.

use async_trait::async_trait;

use cfndump_core::{ClientError, StackCatalog, StackDescriptor, StackPage};

use crate::sdk_error;

/// [`StackCatalog`] over the CloudFormation `DescribeStacks` and
/// `GetTemplate` operations.
///
/// The wrapped client must already be scoped to the target region; the
/// caller builds one catalog per region.
#[derive(Debug, Clone)]
pub struct CloudFormationCatalog {
    client: aws_sdk_cloudformation::Client,
}

impl CloudFormationCatalog {
    /// Wrap a region-scoped CloudFormation client.
    #[must_use]
    pub fn new(client: aws_sdk_cloudformation::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StackCatalog for CloudFormationCatalog {
    async fn list_stacks(&self, next_token: Option<String>) -> Result<StackPage, ClientError> {
        let resp = self
            .client
            .describe_stacks()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(sdk_error)?;

        let stacks = resp
            .stacks()
            .iter()
            .map(|s| to_descriptor(s.stack_name(), s.stack_id()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StackPage {
            stacks,
            next_token: resp.next_token().map(ToOwned::to_owned),
        })
    }

    async fn fetch_template(&self, stack_name: &str) -> Result<String, ClientError> {
        let resp = self
            .client
            .get_template()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(sdk_error)?;

        resp.template_body().map(ToOwned::to_owned).ok_or_else(|| {
            ClientError::message(format!("GetTemplate returned no body for stack {stack_name}"))
        })
    }
}

/// Build a descriptor from the optional fields of a listing entry.
///
/// `DescribeStacks` models both fields as optional; a deployed stack always
/// carries them, so absence is treated as a provider error.
fn to_descriptor(
    name: Option<&str>,
    id: Option<&str>,
) -> Result<StackDescriptor, ClientError> {
    match (name, id) {
        (Some(name), Some(id)) => Ok(StackDescriptor {
            name: name.to_owned(),
            id: id.to_owned(),
        }),
        (None, _) => Err(ClientError::message(
            "DescribeStacks returned a stack without a name",
        )),
        (Some(name), None) => Err(ClientError::message(format!(
            "DescribeStacks returned stack {name} without a stack ID"
        ))),
    }
}
