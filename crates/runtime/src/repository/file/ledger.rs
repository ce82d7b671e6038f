//! File-based LedgerRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{LedgerDocument, LedgerRepository, RepositoryError, Result};

use super::write_atomic;

/// Stores the ledger document as pretty JSON in `conditions.json`.
pub struct FileLedgerRepository {
    path: PathBuf,
}

impl FileLedgerRepository {
    pub const FILE_NAME: &'static str = "conditions.json";

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

impl LedgerRepository for FileLedgerRepository {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&self.path).map_err(RepositoryError::Io)?;
        let document = LedgerDocument::decode(&text)?;

        tracing::debug!(
            path = %self.path.display(),
            conditions = document.conditions.len(),
            "loaded condition ledger"
        );

        Ok(Some(document))
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        write_atomic(&self.path, &document.encode()?)?;

        tracing::debug!(
            path = %self.path.display(),
            conditions = document.conditions.len(),
            "saved condition ledger"
        );

        Ok(())
    }
}
