//! In-memory LedgerRepository implementation.

use std::sync::RwLock;

use crate::repository::{LedgerDocument, LedgerRepository, RepositoryError, Result};

/// In-memory ledger storage for tests and sessions without persistence.
#[derive(Debug, Default)]
pub struct InMemoryLedgerRepo {
    document: RwLock<Option<LedgerDocument>>,
}

impl InMemoryLedgerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerRepository for InMemoryLedgerRepo {
    fn load(&self) -> Result<Option<LedgerDocument>> {
        let document = self
            .document
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(document.clone())
    }

    fn save(&self, document: &LedgerDocument) -> Result<()> {
        let mut stored = self
            .document
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = Some(document.clone());
        Ok(())
    }
}
