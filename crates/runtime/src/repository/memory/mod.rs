//! In-memory repository implementations for testing and development.

mod ledger;
mod turn_order;

pub use ledger::InMemoryLedgerRepo;
pub use turn_order::InMemoryTurnOrderRepo;
