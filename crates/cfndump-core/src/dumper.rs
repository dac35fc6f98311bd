//! The per-region dump orchestrator.

use tracing::debug;

use crate::arn::StackArn;
use crate::client::{CallerIdentity, StackCatalog};
use crate::error::{DumpError, DumpErrorKind};
use crate::format::{canonicalize, detect};
use crate::path::template_path;
use crate::types::{AccountId, StackDescriptor};

/// Dumps every deployed stack's template in one region to disk.
///
/// One `Dumper` is built per region, with a catalog client already scoped to
/// that region. A dump invocation is self-contained: nothing is cached or
/// carried into the next invocation. Stacks are processed strictly
/// sequentially, one service call in flight at a time.
#[derive(Debug, Clone)]
pub struct Dumper<C, I> {
    catalog: C,
    identity: I,
    output_dir: String,
}

impl<C, I> Dumper<C, I>
where
    C: StackCatalog,
    I: CallerIdentity,
{
    /// Create a dumper writing into `output_dir`.
    ///
    /// The directory is assumed to exist and be writable; the CLI shell
    /// validates it before any network call.
    #[must_use]
    pub fn new(catalog: C, identity: I, output_dir: impl Into<String>) -> Self {
        Self {
            catalog,
            identity,
            output_dir: output_dir.into(),
        }
    }

    /// Dump all stacks of the region, returning the number of templates
    /// written.
    ///
    /// On failure the returned [`DumpError`] carries the count of fully
    /// completed prior writes; stacks after the failing one are never
    /// attempted and earlier files remain on disk.
    pub async fn dump(&self) -> Result<usize, DumpError> {
        let stacks = self
            .list_all_stacks()
            .await
            .map_err(|kind| DumpError::new(0, kind))?;

        // The account is invariant across stacks in one invocation, so it is
        // resolved once up front and passed down.
        let account_id = self
            .identity
            .account_id()
            .await
            .map_err(|source| DumpError::new(0, DumpErrorKind::Identity { source }))?;

        let mut written = 0;
        for stack in &stacks {
            self.dump_stack(stack, &account_id)
                .await
                .map_err(|kind| DumpError::new(written, kind))?;
            written += 1;
        }

        Ok(written)
    }

    /// Follow the listing API's continuation token until exhaustion.
    ///
    /// Any page failure aborts the whole dump; pages already fetched are
    /// discarded, so callers never see a partial list.
    async fn list_all_stacks(&self) -> Result<Vec<StackDescriptor>, DumpErrorKind> {
        let mut stacks = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .catalog
                .list_stacks(next_token.take())
                .await
                .map_err(|source| DumpErrorKind::Listing { source })?;

            stacks.extend(page.stacks);
            next_token = page.next_token;
            if next_token.is_none() {
                break;
            }
        }

        debug!(count = stacks.len(), "listed stacks");
        Ok(stacks)
    }

    /// Fetch, reformat, and persist one stack's template.
    async fn dump_stack(
        &self,
        stack: &StackDescriptor,
        account_id: &AccountId,
    ) -> Result<(), DumpErrorKind> {
        let template =
            self.catalog
                .fetch_template(&stack.name)
                .await
                .map_err(|source| DumpErrorKind::Fetch {
                    stack: stack.name.clone(),
                    source,
                })?;

        // The region is parsed out of the stack's ARN, never passed in.
        let arn: StackArn =
            stack
                .id
                .parse()
                .map_err(|source| DumpErrorKind::MalformedStackId {
                    stack: stack.name.clone(),
                    source,
                })?;

        let format = detect(template.as_bytes());
        let path = template_path(
            &self.output_dir,
            account_id,
            &arn.region,
            &stack.name,
            format.extension(),
        );

        let formatted =
            canonicalize(&template, format).map_err(|source| DumpErrorKind::Format {
                stack: stack.name.clone(),
                source,
            })?;

        tokio::fs::write(&path, formatted)
            .await
            .map_err(|source| DumpErrorKind::Write {
                path: path.clone().into(),
                source,
            })?;

        debug!(stack = %stack.name, path = %path, format = %format, "wrote template");
        Ok(())
    }
}
