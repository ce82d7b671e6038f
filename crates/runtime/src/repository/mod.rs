//! Repository layer for the tracker's mutable state.
//!
//! Two stores exist:
//! - the turn order, owned by the host and shared with it as text
//! - the condition ledger, owned by the tracker
//!
//! Both come with an in-memory backend for tests and local runs and a file
//! backend for sessions that outlive the process.

mod document;
mod error;
mod file;
mod memory;
mod traits;

pub use document::{LedgerDocument, decode_turn_order, encode_turn_order};
pub use error::{RepositoryError, Result};
pub use file::{FileLedgerRepository, FileTurnOrderRepository};
pub use memory::{InMemoryLedgerRepo, InMemoryTurnOrderRepo};
pub use traits::{LedgerRepository, TurnOrderRepository};
