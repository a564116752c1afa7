//! Content and metadata sidecar persistence.
//!
//! Each record produces exactly two files in the target directory: the
//! content under a name derived from the URL's final path segment, and the
//! metadata as pretty-printed JSON under the same name plus [`META_SUFFIX`].
//! Existing files are overwritten unconditionally, so reruns are idempotent.

use crate::catalog::SourceKind;
use crate::error::{Error, Result};
use crate::record::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix appended to a content file name to form its metadata sidecar name
pub const META_SUFFIX: &str = ".meta.json";

/// Derive the on-disk file name for a source URL
///
/// Documentation pages get a `.md` extension appended to the final path
/// segment; contract sources keep the segment as-is (it already carries its
/// `.sol` extension).
///
/// # Errors
/// Returns a configuration error if the URL cannot be parsed or has no
/// non-empty final path segment.
pub fn file_name_for(url: &str, kind: SourceKind) -> Result<String> {
    let parsed = url::Url::parse(url).map_err(|e| Error::Config {
        message: format!("invalid source URL '{}': {}", url, e),
        key: None,
    })?;

    let last = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| Error::Config {
            message: format!("source URL '{}' has no file name segment", url),
            key: None,
        })?;

    Ok(match kind {
        SourceKind::Documentation => format!("{}.md", last),
        SourceKind::Contract => last.to_string(),
    })
}

/// Write a record's content file and metadata sidecar into `dir`
///
/// Creates `dir` and its parents if absent. Returns the content file path.
///
/// # Errors
/// Returns an error if the file name cannot be derived, if either write
/// fails, or if the metadata cannot be serialized. A sidecar write failure
/// leaves the already-written content file in place; a rerun overwrites both.
pub fn write_record(dir: &Path, record: &Record) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let file_name = file_name_for(&record.metadata.source_url, record.metadata.kind)?;
    let content_path = dir.join(&file_name);
    fs::write(&content_path, &record.content)?;

    let meta_path = dir.join(format!("{}{}", file_name, META_SUFFIX));
    let meta_json = serde_json::to_string_pretty(&record.metadata)?;
    fs::write(&meta_path, meta_json)?;

    debug!(path = %content_path.display(), "wrote content and metadata sidecar");
    Ok(content_path)
}
