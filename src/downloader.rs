//! Top-level orchestration over the source catalog.
//!
//! A single linear pass: versions are processed sequentially; within a
//! version the documentation batch is fetched and written, then the contract
//! batch. Each batch runs through a bounded worker pool and is fully drained
//! before the next batch is submitted. Completion order within a batch is
//! whatever the pool yields.

use crate::catalog::{self, SourceKind, VersionSources};
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::{FetchResult, Fetcher};
use crate::record::Record;
use crate::writer;
use futures::{StreamExt, stream};
use std::path::Path;
use tracing::info;

/// One-shot downloader driving the fetch-and-write pass
pub struct DocsDownloader {
    config: Config,
    fetcher: Fetcher,
}

impl DocsDownloader {
    /// Create a downloader from the given configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }

    /// Process the built-in catalog
    ///
    /// Individual fetch failures are logged and produce no output files;
    /// filesystem or serialization failures abort the run.
    pub async fn run(&self) -> Result<()> {
        self.process_versions(&catalog::catalog()).await
    }

    /// Process an explicit list of version sources
    ///
    /// [`run`](Self::run) delegates here with the built-in catalog; tests
    /// inject sources pointing at a mock server.
    pub async fn process_versions(&self, versions: &[VersionSources]) -> Result<()> {
        for sources in versions {
            info!(version = %sources.version, "processing Uniswap documentation");
            let version_dir = self.config.output_dir.join(&sources.version);

            self.process_batch(&version_dir, sources, SourceKind::Documentation)
                .await?;
            self.process_batch(&version_dir, sources, SourceKind::Contract)
                .await?;
        }

        info!("documentation processing complete");
        Ok(())
    }

    /// Fetch one category's URLs through the worker pool and write the
    /// successful results. The output directory is created up front so the
    /// version layout exists even when every fetch fails.
    async fn process_batch(
        &self,
        version_dir: &Path,
        sources: &VersionSources,
        kind: SourceKind,
    ) -> Result<()> {
        let dir = version_dir.join(kind.dir_name());
        std::fs::create_dir_all(&dir)?;

        let results: Vec<FetchResult> = stream::iter(sources.urls(kind))
            .map(|url| self.fetcher.fetch(url))
            .buffer_unordered(self.config.max_concurrent_fetches)
            .collect()
            .await;

        for result in results {
            if result.is_empty() {
                // failure already logged by the fetcher
                continue;
            }
            let FetchResult { url, content } = result;
            let record = Record::new(&sources.version, content, &url, kind);
            writer::write_record(&dir, &record)?;
        }

        Ok(())
    }
}
