//! Marker set and marker library loaders.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::markers::{MarkerSet, TokenMarker};

/// Loader for marker sets from TOML files.
///
/// ```toml
/// name = "my-markers"
///
/// [markers]
/// shaken = "skull"
/// prone = "arrowed"
/// ```
pub struct MarkerSetLoader;

impl MarkerSetLoader {
    pub fn load(path: &Path) -> LoadResult<MarkerSet> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<MarkerSet> {
        let set: MarkerSet = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse marker set TOML: {}", e))?;
        tracing::debug!(set = %set.name, markers = set.markers.len(), "loaded marker set");
        Ok(set)
    }
}

/// Loader for the host's marker library, a JSON array of `{name, tag, ..}`.
pub struct TokenMarkerLoader;

impl TokenMarkerLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<TokenMarker>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Empty text is an empty library.
    pub fn parse(content: &str) -> LoadResult<Vec<TokenMarker>> {
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse token marker JSON: {}", e))
    }
}
