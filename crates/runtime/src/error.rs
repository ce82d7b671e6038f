//! Unified error type surfaced by the runtime API.
//!
//! Wraps tracker rule failures and repository failures so callers can turn
//! them into a notice for the requester or a log line.
use std::fmt;

use thiserror::Error;
use tracker_core::{ErrorSeverity, TrackerError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{kind} gateway not set")]
    GatewayNotSet { kind: GatewayKind },
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Tracker(error) => error.severity(),
            RuntimeError::Repository(_) | RuntimeError::GatewayNotSet { .. } => {
                ErrorSeverity::Internal
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GatewayKind {
    Markers,
    Notifier,
    Roster,
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GatewayKind::Markers => "marker",
            GatewayKind::Notifier => "notifier",
            GatewayKind::Roster => "roster",
        };
        write!(f, "{}", label)
    }
}
