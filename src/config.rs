//! Configuration types for uniswap-docs-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Downloader configuration (output location, concurrency, HTTP behavior)
///
/// Works out of the box with zero configuration; every field has a sensible
/// default matching the CLI defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Output root directory (default: "docs/uniswap")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Maximum concurrent fetches per batch (default: 10)
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("docs/uniswap")
}

fn default_max_concurrent_fetches() -> usize {
    10
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("uniswap-docs-dl/", env!("CARGO_PKG_VERSION")).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("docs/uniswap"));
        assert_eq!(config.max_concurrent_fetches, 10);
        assert_eq!(config.fetch_timeout_secs, 30);
        assert!(config.user_agent.starts_with("uniswap-docs-dl/"));
    }

    #[test]
    fn deserializes_with_all_fields_defaulted() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_concurrent_fetches, 10);
    }
}
