//! Runtime wiring for the condition tracker.
//!
//! This crate connects the pure engine in `tracker-core` to storage and to
//! the host. Consumers build a [`ConditionTracker`] with injected gateways and
//! feed it [`HostEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`tracker`] hosts the orchestrator and builder
//! - [`commands`] parses and dispatches `!cc` / `!cond` chat commands
//! - [`events`] maps host events onto tracker operations
//! - [`gateway`] declares the host-facing traits and in-memory versions
//! - [`repository`] stores the turn order and the condition ledger
pub mod commands;
pub mod error;
pub mod events;
pub mod gateway;
pub mod repository;
pub mod tracker;

pub use commands::{ChatCommand, ChatMessage, ConditionCommand, ReferenceQuery, parse_duration};
pub use error::{GatewayKind, Result, RuntimeError};
pub use events::HostEvent;
pub use gateway::{
    Audience, Character, InMemoryMarkers, InMemoryRoster, MarkerGateway, Notice, Notifier,
    RecordingNotifier, Roster, TargetConditions,
};
pub use repository::{
    FileLedgerRepository, FileTurnOrderRepository, InMemoryLedgerRepo, InMemoryTurnOrderRepo,
    LedgerDocument, LedgerRepository, RepositoryError, TurnOrderRepository, decode_turn_order,
    encode_turn_order,
};
pub use tracker::{ConditionTracker, TrackerBuilder};
