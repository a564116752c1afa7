//! # uniswap-docs-dl
//!
//! One-shot downloader for Uniswap documentation pages and smart-contract
//! source files.
//!
//! The crate walks a fixed catalog of sources for two protocol versions (v2
//! and v3), fetches every URL through a bounded worker pool, and writes each
//! successful fetch to disk together with a `.meta.json` metadata sidecar.
//! A failed fetch is logged and skipped; it never aborts the run.
//!
//! ## Quick Start
//!
//! ```no_run
//! use uniswap_docs_dl::{Config, DocsDownloader};
//!
//! #[tokio::main]
//! async fn main() -> uniswap_docs_dl::Result<()> {
//!     let config = Config {
//!         output_dir: "docs/uniswap".into(),
//!         ..Default::default()
//!     };
//!
//!     DocsDownloader::new(config)?.run().await
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Static catalog of documentation and contract sources
pub mod catalog;
/// Configuration types
pub mod config;
/// Top-level orchestration over the catalog
pub mod downloader;
/// Error types
pub mod error;
/// HTTP fetching with failure-as-empty semantics
pub mod fetcher;
/// Fetched-record and metadata types
pub mod record;
/// Content and metadata sidecar persistence
pub mod writer;

// Re-export commonly used types
pub use catalog::{SourceKind, VersionSources, catalog};
pub use config::Config;
pub use downloader::DocsDownloader;
pub use error::{Error, Result};
pub use fetcher::{FetchResult, Fetcher};
pub use record::{Record, RecordMetadata};
