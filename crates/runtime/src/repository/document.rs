//! Stored text formats for the turn order and the condition ledger.

use serde::{Deserialize, Serialize};
use tracker_core::{ConditionInstance, ConditionLedger, TrackerConfig, TurnOrder};

use super::{RepositoryError, Result};

/// Parses stored turn order text. Blank text is an empty order.
pub fn decode_turn_order(text: &str) -> Result<TurnOrder> {
    if text.trim().is_empty() {
        return Ok(TurnOrder::new());
    }
    serde_json::from_str(text)
        .map_err(|e| RepositoryError::CorruptedData(format!("turn order: {e}")))
}

pub fn encode_turn_order(order: &TurnOrder) -> Result<String> {
    Ok(serde_json::to_string(order)?)
}

/// Versioned document the ledger is persisted as.
///
/// ```json
/// { "version": "0.1", "conditions": [ ... ] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDocument {
    pub version: String,
    #[serde(default)]
    pub conditions: Vec<ConditionInstance>,
}

impl LedgerDocument {
    pub fn new() -> Self {
        Self {
            version: TrackerConfig::LEDGER_VERSION.to_owned(),
            conditions: Vec::new(),
        }
    }

    pub fn from_ledger(ledger: &ConditionLedger) -> Self {
        Self {
            conditions: ledger.iter().cloned().collect(),
            ..Self::new()
        }
    }

    /// Converts to a ledger, dropping entries that break its invariants.
    pub fn into_ledger(self) -> ConditionLedger {
        if self.version != TrackerConfig::LEDGER_VERSION {
            tracing::warn!(
                version = %self.version,
                expected = TrackerConfig::LEDGER_VERSION,
                "ledger document has an unexpected version"
            );
        }
        ConditionLedger::from_instances(self.conditions)
    }

    pub fn decode(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| RepositoryError::CorruptedData(format!("condition ledger: {e}")))
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for LedgerDocument {
    fn default() -> Self {
        Self::new()
    }
}
