//! Error types for uniswap-docs-dl
//!
//! Fetch failures are deliberately not represented here: the fetcher logs
//! them and degrades to empty content, so only configuration, filesystem,
//! and serialization problems surface as errors.

use thiserror::Error;

/// Result type alias for uniswap-docs-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for uniswap-docs-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "output_dir")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network error (HTTP client construction; request failures are
    /// swallowed by the fetcher and never reach this variant)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
