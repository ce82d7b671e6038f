//! Repository contracts for the tracker's mutable state.

use tracker_core::{ConditionLedger, TurnOrder};

use super::document::{LedgerDocument, decode_turn_order, encode_turn_order};
use super::Result;

/// Storage for the host's turn order, kept as the host's own text form.
///
/// The text is owned by the host and may be rewritten at any time; readers
/// must take a fresh snapshot per event.
pub trait TurnOrderRepository: Send + Sync {
    /// Stored text; empty when nothing was ever written.
    fn load_text(&self) -> Result<String>;

    /// Replaces the stored text in one step.
    fn store_text(&self, text: &str) -> Result<()>;

    /// Parsed turn order. Absent or blank storage is an empty order.
    fn read(&self) -> Result<TurnOrder> {
        decode_turn_order(&self.load_text()?)
    }

    fn write(&self, order: &TurnOrder) -> Result<()> {
        self.store_text(&encode_turn_order(order)?)
    }
}

/// Storage for the condition ledger document.
pub trait LedgerRepository: Send + Sync {
    /// Load the stored document, `None` if it was never created.
    fn load(&self) -> Result<Option<LedgerDocument>>;

    /// Replace the stored document.
    fn save(&self, document: &LedgerDocument) -> Result<()>;

    /// Creates an empty document if none exists and returns the ledger.
    fn init(&self) -> Result<ConditionLedger> {
        match self.load()? {
            Some(document) => Ok(document.into_ledger()),
            None => {
                tracing::info!("creating empty condition ledger");
                self.save(&LedgerDocument::new())?;
                Ok(ConditionLedger::new())
            }
        }
    }

    /// Drops every stored instance.
    fn reset(&self) -> Result<()> {
        tracing::info!("resetting condition ledger");
        self.save(&LedgerDocument::new())
    }

    fn read(&self) -> Result<ConditionLedger> {
        Ok(self
            .load()?
            .map(LedgerDocument::into_ledger)
            .unwrap_or_default())
    }

    fn write(&self, ledger: &ConditionLedger) -> Result<()> {
        self.save(&LedgerDocument::from_ledger(ledger))
    }
}
