//! File-based TurnOrderRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RepositoryError, Result, TurnOrderRepository};

use super::write_atomic;

/// Stores the turn order text as `turn_order.json` in a session directory.
pub struct FileTurnOrderRepository {
    path: PathBuf,
}

impl FileTurnOrderRepository {
    pub const FILE_NAME: &'static str = "turn_order.json";

    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        fs::create_dir_all(base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            path: base_dir.join(Self::FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TurnOrderRepository for FileTurnOrderRepository {
    fn load_text(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path).map_err(RepositoryError::Io)
    }

    fn store_text(&self, text: &str) -> Result<()> {
        write_atomic(&self.path, text)?;
        tracing::debug!(path = %self.path.display(), "saved turn order");
        Ok(())
    }
}
