//! Static catalog of Uniswap documentation and contract sources.
//!
//! The catalog is a fixed configuration table built at startup: for each
//! protocol version, a list of documentation page URLs and a list of
//! contract source URLs. Nothing in this crate mutates it.

use serde::{Deserialize, Serialize};

/// Category of a source, recorded as the `type` field of the metadata sidecar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Rendered documentation page (written with a `.md` extension)
    Documentation,
    /// Solidity contract source file (written under its original file name)
    Contract,
}

impl SourceKind {
    /// Output subdirectory name for this category
    pub fn dir_name(&self) -> &'static str {
        match self {
            SourceKind::Documentation => "docs",
            SourceKind::Contract => "contracts",
        }
    }
}

/// All sources for a single protocol version
#[derive(Clone, Debug)]
pub struct VersionSources {
    /// Protocol version label, used as the output subdirectory (e.g. "v2")
    pub version: String,
    /// Documentation page URLs
    pub docs: Vec<String>,
    /// Contract source URLs
    pub contracts: Vec<String>,
}

impl VersionSources {
    /// The URL list for the given category
    pub fn urls(&self, kind: SourceKind) -> &[String] {
        match kind {
            SourceKind::Documentation => &self.docs,
            SourceKind::Contract => &self.contracts,
        }
    }
}

fn version(version: &str, docs: &[&str], contracts: &[&str]) -> VersionSources {
    VersionSources {
        version: version.to_string(),
        docs: docs.iter().map(|url| url.to_string()).collect(),
        contracts: contracts.iter().map(|url| url.to_string()).collect(),
    }
}

/// Build the full source catalog: two protocol versions, three documentation
/// pages and three contract files each.
pub fn catalog() -> Vec<VersionSources> {
    vec![
        version(
            "v2",
            &[
                "https://docs.uniswap.org/contracts/v2/overview",
                "https://docs.uniswap.org/contracts/v2/concepts",
                "https://docs.uniswap.org/contracts/v2/guides",
            ],
            &[
                "https://raw.githubusercontent.com/Uniswap/v2-core/master/contracts/UniswapV2Pair.sol",
                "https://raw.githubusercontent.com/Uniswap/v2-core/master/contracts/UniswapV2Factory.sol",
                "https://raw.githubusercontent.com/Uniswap/v2-periphery/master/contracts/UniswapV2Router02.sol",
            ],
        ),
        version(
            "v3",
            &[
                "https://docs.uniswap.org/contracts/v3/overview",
                "https://docs.uniswap.org/contracts/v3/concepts",
                "https://docs.uniswap.org/contracts/v3/guides",
            ],
            &[
                "https://raw.githubusercontent.com/Uniswap/v3-core/main/contracts/UniswapV3Pool.sol",
                "https://raw.githubusercontent.com/Uniswap/v3-core/main/contracts/UniswapV3Factory.sol",
                "https://raw.githubusercontent.com/Uniswap/v3-periphery/main/contracts/SwapRouter.sol",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_both_versions_with_three_urls_per_category() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].version, "v2");
        assert_eq!(catalog[1].version, "v3");
        for sources in &catalog {
            assert_eq!(sources.docs.len(), 3);
            assert_eq!(sources.contracts.len(), 3);
        }
    }

    #[test]
    fn all_catalog_urls_are_valid_https_with_a_file_segment() {
        for sources in catalog() {
            for kind in [SourceKind::Documentation, SourceKind::Contract] {
                for raw in sources.urls(kind) {
                    let parsed = url::Url::parse(raw).unwrap();
                    assert_eq!(parsed.scheme(), "https");
                    let last = parsed
                        .path_segments()
                        .and_then(|mut segments| segments.next_back())
                        .unwrap();
                    assert!(!last.is_empty(), "no file segment in {raw}");
                }
            }
        }
    }

    #[test]
    fn source_kind_serializes_to_sidecar_labels() {
        assert_eq!(
            serde_json::to_string(&SourceKind::Documentation).unwrap(),
            "\"documentation\""
        );
        assert_eq!(
            serde_json::to_string(&SourceKind::Contract).unwrap(),
            "\"contract\""
        );
    }
}
