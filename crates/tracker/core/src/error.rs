//! Common error infrastructure for tracker-core.
//!
//! Every error here is local to a single operation: the operation that
//! produced it is abandoned, nothing else in the ledger or the turn order is
//! touched, and the event loop carries on.

use crate::state::ConditionKind;

/// Severity level of an error, used to decide who hears about it.
///
/// - **Recoverable**: expected transient state, skipped quietly
/// - **Validation**: bad operator input, reported to the requester only
/// - **Internal**: inconsistent stored data, logged for investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Transient state, e.g. an empty turn order right after the tracker opened.
    Recoverable,

    /// Invalid input that should not be retried without changes.
    Validation,

    /// Stored data violates an invariant.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the requester should be told about the failure.
    pub const fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation)
    }
}

/// Errors surfaced by tracker operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrackerError {
    #[error("Unknown condition {name}")]
    UnknownCondition { name: String },

    #[error("no marker mapped for condition {condition}")]
    MissingMarkerMapping { condition: ConditionKind },

    #[error("turn order is empty")]
    EmptyTurnOrder,

    #[error("round counter is corrupt: {reason}")]
    CorruptRoundCounter { reason: String },

    #[error("Invalid duration {value}")]
    InvalidDuration { value: String },
}

impl TrackerError {
    pub fn unknown_condition(name: impl Into<String>) -> Self {
        Self::UnknownCondition { name: name.into() }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownCondition { .. } | Self::InvalidDuration { .. } => {
                ErrorSeverity::Validation
            }
            Self::EmptyTurnOrder => ErrorSeverity::Recoverable,
            Self::MissingMarkerMapping { .. } | Self::CorruptRoundCounter { .. } => {
                ErrorSeverity::Internal
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
