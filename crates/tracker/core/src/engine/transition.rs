use crate::state::{ActorId, TurnOrder};

/// Why a turn-order change was not treated as a turn passing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonAdvance {
    /// One of the snapshots has no entries (tracker just opened or cleared).
    EmptyOrder,
    /// The head of the order is unchanged: sorting or edits further down.
    SameActor,
    /// Entries were added or removed.
    MembershipChanged,
}

impl NonAdvance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyOrder => "empty_order",
            Self::SameActor => "same_actor",
            Self::MembershipChanged => "membership_changed",
        }
    }
}

/// Classification of a turn-order-changed event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnTransition {
    /// A turn passed and `active` is now at the head of the order.
    Advance { active: ActorId },
    Unchanged(NonAdvance),
}

impl TurnTransition {
    /// A turn passed only when the head changed and the order kept its size.
    pub fn classify(previous: &TurnOrder, current: &TurnOrder) -> Self {
        let (Some(active), Some(previous_active)) =
            (current.active_actor(), previous.active_actor())
        else {
            return Self::Unchanged(NonAdvance::EmptyOrder);
        };

        if active == previous_active {
            Self::Unchanged(NonAdvance::SameActor)
        } else if current.len() != previous.len() {
            Self::Unchanged(NonAdvance::MembershipChanged)
        } else {
            Self::Advance {
                active: active.clone(),
            }
        }
    }
}
