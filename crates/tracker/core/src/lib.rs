//! Duration tracking for tabletop conditions.
//!
//! `tracker-core` defines the canonical rules for timed conditions: the round
//! counter row inside the host's turn order, the condition ledger, and the
//! countdown state machine that reacts to turn-order changes. It performs no
//! I/O; the runtime crate loads snapshots, calls into [`engine`], and applies
//! the resulting side effects (markers, notifications).
pub mod config;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod state;

pub use config::TrackerConfig;
pub use engine::{
    CountdownEngine, CountdownOutcome, CountdownReport, NonAdvance, RoundCounter, RoundReading,
    TurnTransition, parse_round,
};
pub use error::{ErrorSeverity, Result, TrackerError};
pub use ledger::ConditionLedger;
pub use state::{
    ActorId, CharacterId, ConditionInstance, ConditionKind, PlayerId, Round, TurnEntry, TurnOrder,
};
