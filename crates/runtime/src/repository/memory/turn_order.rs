//! In-memory TurnOrderRepository implementation.

use std::sync::RwLock;

use crate::repository::{RepositoryError, Result, TurnOrderRepository};

/// Holds the turn order text the way a host campaign object would.
#[derive(Debug, Default)]
pub struct InMemoryTurnOrderRepo {
    text: RwLock<String>,
}

impl InMemoryTurnOrderRepo {
    /// Create a repository with no stored turn order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial stored text, parsed lazily on read.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
        }
    }
}

impl TurnOrderRepository for InMemoryTurnOrderRepo {
    fn load_text(&self) -> Result<String> {
        let text = self.text.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(text.clone())
    }

    fn store_text(&self, text: &str) -> Result<()> {
        let mut stored = self
            .text
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *stored = text.to_owned();
        Ok(())
    }
}
