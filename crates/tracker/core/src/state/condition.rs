//! Condition kinds and the timed instances recorded against tokens.

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::{ActorId, Round};
use crate::error::TrackerError;

/// Closed set of conditions the tracker knows how to mark and count down.
///
/// Names are the lowercase, hyphenated forms operators type in chat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConditionKind {
    Bleed,
    Blinded,
    Broken,
    Confused,
    Cowering,
    Dazed,
    Dazzled,
    Dead,
    Deafened,
    Disabled,
    Dying,
    EnergyDrained,
    Entangled,
    Exhausted,
    Fascinated,
    Fatigued,
    FlatFooted,
    Frightened,
    Grappled,
    Helpless,
    Incorporeal,
    Invisible,
    Nauseated,
    Panicked,
    Paralyzed,
    Petrified,
    Pinned,
    Prone,
    Shaken,
    Sickened,
    Stable,
    Staggered,
    Stunned,
    Unconscious,
}

impl ConditionKind {
    /// Every known kind, in declaration order.
    pub fn all() -> impl Iterator<Item = ConditionKind> {
        ConditionKind::iter()
    }

    /// Name used in chat commands.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Parses an operator-typed name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self, TrackerError> {
        name.trim()
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| TrackerError::unknown_condition(name))
    }
}

/// An active timed condition on a target.
///
/// The countdown is driven by `actor`'s turns: each time `actor` reaches the
/// head of the order in a newer round, `duration` drops by one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionInstance {
    /// Turn-order entry whose turns govern this countdown.
    pub actor: ActorId,
    /// Token bearing the condition.
    pub target: ActorId,
    pub condition: ConditionKind,
    /// Remaining turns. Never zero while stored.
    pub duration: u32,
    /// Round in which this instance was created or last counted down.
    pub updated_on_round: Round,
}

impl ConditionInstance {
    pub fn new(
        actor: ActorId,
        target: ActorId,
        condition: ConditionKind,
        duration: u32,
        updated_on_round: Round,
    ) -> Self {
        Self {
            actor,
            target,
            condition,
            duration,
            updated_on_round,
        }
    }

    /// Returns true if this instance is stored under the given key.
    pub fn has_key(&self, target: &ActorId, condition: ConditionKind) -> bool {
        &self.target == target && self.condition == condition
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_chat_names() {
        assert_eq!(ConditionKind::from_str("shaken"), Ok(ConditionKind::Shaken));
        assert_eq!(
            ConditionKind::from_str("energy-drained"),
            Ok(ConditionKind::EnergyDrained)
        );
        assert_eq!(
            ConditionKind::from_str("flat-footed"),
            Ok(ConditionKind::FlatFooted)
        );
        assert!(ConditionKind::from_str("sleepy").is_err());
    }

    #[test]
    fn operator_names_ignore_case() {
        assert_eq!(ConditionKind::parse("Shaken"), Ok(ConditionKind::Shaken));
        assert_eq!(
            ConditionKind::parse("sleepy"),
            Err(TrackerError::unknown_condition("sleepy"))
        );
    }

    #[test]
    fn displays_chat_names() {
        assert_eq!(ConditionKind::FlatFooted.to_string(), "flat-footed");
        assert_eq!(ConditionKind::all().count(), ConditionKind::COUNT);
        assert_eq!(ConditionKind::COUNT, 34);
    }
}
