//! Template format detection and canonical re-serialization.
//!
//! Detection is content-based only: a body is structured markup if and only
//! if it parses as a complete JSON document (bare scalars included). File
//! extensions and API metadata are never consulted.

use crate::error::FormatError;
use crate::types::DetectedFormat;

/// Classify a raw template body.
///
/// Total over all byte sequences: any parse failure, including the empty
/// input, classifies as [`DetectedFormat::Block`]. Never panics.
#[must_use]
pub fn detect(body: &[u8]) -> DetectedFormat {
    if serde_json::from_slice::<serde_json::Value>(body).is_ok() {
        DetectedFormat::Structured
    } else {
        DetectedFormat::Block
    }
}

/// Re-serialize a template body into its canonical human-readable form.
///
/// JSON is re-indented with two spaces, preserving key order and value
/// types. YAML is round-tripped through a generic document tree and emitted
/// in the library's canonical style. YAML detection is more permissive than
/// the YAML grammar, so the block path can legitimately fail; the error is
/// surfaced, never swallowed.
pub fn canonicalize(body: &str, format: DetectedFormat) -> Result<String, FormatError> {
    match format {
        DetectedFormat::Structured => {
            let value: serde_json::Value =
                serde_json::from_str(body).map_err(FormatError::Json)?;
            serde_json::to_string_pretty(&value).map_err(FormatError::Json)
        }
        DetectedFormat::Block => {
            let value: serde_yaml_ng::Value =
                serde_yaml_ng::from_str(body).map_err(FormatError::YamlParse)?;
            serde_yaml_ng::to_string(&value).map_err(FormatError::YamlEmit)
        }
    }
}
