//! Content loaders for reading tracker data from files.
//!
//! Marker sets and tracker configuration are TOML; the host's marker library
//! arrives as the JSON the host exports.

pub mod config;
pub mod factory;
pub mod markers;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use markers::{MarkerSetLoader, TokenMarkerLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
