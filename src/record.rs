//! Fetched-record and metadata sidecar types.

use crate::catalog::SourceKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata written as the `.meta.json` sidecar next to each content file
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Protocol version the source belongs to (catalog key, e.g. "v2")
    pub version: String,
    /// URL the content was fetched from
    pub source_url: String,
    /// UTC time the record was built, serialized RFC 3339
    pub processed_at: DateTime<Utc>,
    /// Source category ("documentation" or "contract")
    #[serde(rename = "type")]
    pub kind: SourceKind,
}

/// A successfully fetched source plus its metadata
///
/// Built once after a successful fetch, written once, never read back.
#[derive(Clone, Debug)]
pub struct Record {
    /// The fetched body, written verbatim to the content file
    pub content: String,
    /// Sidecar metadata
    pub metadata: RecordMetadata,
}

impl Record {
    /// Wrap fetched content with its metadata, timestamping at call time
    pub fn new(version: &str, content: String, url: &str, kind: SourceKind) -> Self {
        Self {
            content,
            metadata: RecordMetadata {
                version: version.to_string(),
                source_url: url.to_string(),
                processed_at: Utc::now(),
                kind,
            },
        }
    }
}
