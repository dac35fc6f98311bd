//! Common AWS type definitions shared across the dump pipeline.

use std::fmt;

use crate::error::InvalidAccountId;

/// AWS Account ID (12-digit string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new account ID from a string.
    ///
    /// # Errors
    /// Returns an error if the account ID is not a 12-digit numeric string.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidAccountId> {
        let id = id.into();
        if id.len() != 12 || !id.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidAccountId(id));
        }
        Ok(Self(id))
    }

    /// Get the account ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// AWS Region identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deployed stack as reported by the listing API.
///
/// `id` is the stack's ARN, kept opaque until the dumper needs the region
/// encoded in it. Descriptors are scoped to a single dump invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackDescriptor {
    /// Stack name, unique per account and region.
    pub name: String,
    /// Stack ARN.
    pub id: String,
}

/// One page of the stack listing API.
#[derive(Debug, Clone, Default)]
pub struct StackPage {
    /// Stacks in this page, in API order.
    pub stacks: Vec<StackDescriptor>,
    /// Continuation token; `None` signals the last page.
    pub next_token: Option<String>,
}

/// Serialization format of a template body, derived from content alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectedFormat {
    /// Strict machine-oriented markup (JSON).
    Structured,
    /// Indentation-sensitive markup (YAML).
    Block,
}

impl DetectedFormat {
    /// File extension used when persisting a template of this format.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Structured => "json",
            Self::Block => "yaml",
        }
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured => write!(f, "json"),
            Self::Block => write!(f, "yaml"),
        }
    }
}
