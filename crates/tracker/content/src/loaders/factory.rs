//! Content factory for building the marker catalog and config from a data
//! directory.

use std::path::{Path, PathBuf};

use tracker_core::TrackerConfig;

use crate::loaders::{ConfigLoader, LoadResult, MarkerSetLoader, TokenMarkerLoader};
use crate::markers::{MarkerCatalog, MarkerSet, TokenMarker};

/// Content factory that loads tracker content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tracker.toml        (optional)
/// ├── markers.toml        (optional, defaults to the built-in set)
/// └── token_markers.json  (optional, defaults to tags == marker names)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load `tracker.toml`, or defaults when absent.
    pub fn load_config(&self) -> LoadResult<TrackerConfig> {
        let path = self.data_dir.join("tracker.toml");
        if !path.exists() {
            return Ok(TrackerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load `markers.toml`, or the built-in set when absent.
    pub fn load_marker_set(&self) -> LoadResult<MarkerSet> {
        let path = self.data_dir.join("markers.toml");
        if !path.exists() {
            return Ok(MarkerSet::rpg_condition_markers());
        }
        MarkerSetLoader::load(&path)
    }

    /// Load `token_markers.json`, if present.
    pub fn load_token_markers(&self) -> LoadResult<Option<Vec<TokenMarker>>> {
        let path = self.data_dir.join("token_markers.json");
        if !path.exists() {
            return Ok(None);
        }
        TokenMarkerLoader::load(&path).map(Some)
    }

    /// Build the marker catalog from whatever the directory provides.
    pub fn load_catalog(&self) -> LoadResult<MarkerCatalog> {
        let set = self.load_marker_set()?;
        Ok(match self.load_token_markers()? {
            Some(library) => MarkerCatalog::new(set, library),
            None => MarkerCatalog::standalone(set),
        })
    }
}

#[cfg(test)]
mod tests {
    use tracker_core::ConditionKind;

    use super::*;

    #[test]
    fn empty_directory_uses_built_in_content() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), TrackerConfig::default());
        let catalog = factory.load_catalog().unwrap();
        assert_eq!(
            catalog.tag_for(ConditionKind::Shaken).unwrap().as_str(),
            "path-condition-shaken"
        );
    }

    #[test]
    fn host_library_overrides_tags() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("token_markers.json"),
            r#"[{"name":"path-condition-prone","tag":"path-condition-prone::77"}]"#,
        )
        .unwrap();

        let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();

        assert_eq!(
            catalog.tag_for(ConditionKind::Prone).unwrap().as_str(),
            "path-condition-prone::77"
        );
        assert!(catalog.tag_for(ConditionKind::Shaken).is_err());
    }
}
