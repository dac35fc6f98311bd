//! Error taxonomy for the dump pipeline.
//!
//! Library code returns typed errors; `anyhow` only appears as the opaque
//! carrier for provider errors inside [`ClientError`]. Every failure mode
//! aborts the remaining stacks of the region; files already written stay on
//! disk (no rollback).

use std::io;
use std::path::PathBuf;

use crate::arn::ArnError;

/// Invalid AWS account ID format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid AWS account ID: {0} (must be 12-digit numeric string)")]
pub struct InvalidAccountId(pub String);

/// Error returned by a service client implementation.
///
/// Wraps the provider error verbatim; callers add stack/step context when
/// folding it into [`DumpErrorKind`].
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ClientError(#[from] anyhow::Error);

impl ClientError {
    /// Wrap a concrete provider error.
    #[must_use]
    pub fn new<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(anyhow::Error::new(source))
    }

    /// A client error with a bare message (missing response fields and the like).
    #[must_use]
    pub fn message(msg: impl Into<String>) -> Self {
        Self(anyhow::Error::msg(msg.into()))
    }
}

/// A template body failed canonical re-serialization.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// A body detected as JSON failed the JSON round-trip. Unreachable when
    /// detection and formatting see the same bytes, but handled regardless.
    #[error("failed to format JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The body is not valid YAML either. Detection is more permissive than
    /// the YAML parser, so this path is reachable and must surface.
    #[error("failed to parse YAML: {0}")]
    YamlParse(#[source] serde_yaml_ng::Error),

    /// The parsed YAML document could not be re-serialized.
    #[error("failed to format YAML: {0}")]
    YamlEmit(#[source] serde_yaml_ng::Error),
}

/// What went wrong, and at which step of the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DumpErrorKind {
    /// Failure paginating the stack listing; nothing was written.
    #[error("failed to list stacks: {source}")]
    Listing {
        /// Provider error, verbatim.
        #[source]
        source: ClientError,
    },

    /// Failure resolving the caller's account ID.
    #[error("failed to resolve caller identity: {source}")]
    Identity {
        /// Provider error, verbatim.
        #[source]
        source: ClientError,
    },

    /// Failure retrieving one stack's template.
    #[error("failed to fetch template for stack {stack}: {source}")]
    Fetch {
        /// Stack being fetched.
        stack: String,
        /// Provider error, verbatim.
        #[source]
        source: ClientError,
    },

    /// The listing API returned a stack whose ARN does not parse.
    #[error("stack {stack} has a malformed stack ID: {source}")]
    MalformedStackId {
        /// Stack whose descriptor is malformed.
        stack: String,
        /// Parse failure.
        #[source]
        source: ArnError,
    },

    /// The template body failed canonical re-serialization.
    #[error("failed to format template for stack {stack}: {source}")]
    Format {
        /// Stack whose template failed.
        stack: String,
        /// Underlying format error.
        #[source]
        source: FormatError,
    },

    /// Filesystem failure creating or writing the output file.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A dump failure, carrying the count of fully completed prior writes.
///
/// `dump()` returns `Result<usize, DumpError>`; on failure the templates
/// written before the failing stack remain on disk and `written` says how
/// many there are.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct DumpError {
    /// Number of templates fully written before the failure.
    pub written: usize,
    /// The failing step.
    #[source]
    pub kind: DumpErrorKind,
}

impl DumpError {
    /// Attach a prior-write count to a failing step.
    #[must_use]
    pub fn new(written: usize, kind: DumpErrorKind) -> Self {
        Self { written, kind }
    }
}
