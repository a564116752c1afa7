//! Command-line entry point for uniswap-docs-dl.

use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uniswap_docs_dl::{Config, DocsDownloader};

/// Fetch Uniswap documentation pages and contract sources into a local tree
#[derive(Parser, Debug)]
#[command(
    name = "uniswap-docs-dl",
    version,
    about = "Download Uniswap v2/v3 documentation and contract sources with metadata sidecars"
)]
struct Cli {
    /// Output root directory
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Maximum number of concurrent fetches
    #[arg(long)]
    concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::default();
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(concurrency) = cli.concurrency {
        config.max_concurrent_fetches = concurrency;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.fetch_timeout_secs = timeout_secs;
    }

    let result = match DocsDownloader::new(config) {
        Ok(downloader) => downloader.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}
