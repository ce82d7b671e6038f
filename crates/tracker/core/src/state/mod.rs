//! Tracker state representation.
//!
//! This module owns the identifiers, the turn order snapshot, and the
//! condition instances recorded in the ledger. Runtime layers load and store
//! these values; all countdown mutations go through [`crate::engine`].
mod condition;
mod ids;
mod turn;

pub use condition::{ConditionInstance, ConditionKind};
pub use ids::{ActorId, CharacterId, PlayerId, Round};
pub use turn::{TurnEntry, TurnOrder};

#[cfg(feature = "serde")]
pub use turn::HostFields;
