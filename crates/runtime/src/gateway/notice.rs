//! Notices the tracker sends and who receives them.

use std::fmt;

use tracker_core::{CharacterId, ConditionKind, PlayerId};

/// Recipients of a notice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Audience {
    /// Whispered to the game master.
    Gm,
    /// Whispered to one player.
    Player(PlayerId),
    /// Whispered to whoever controls a character.
    Controllers(CharacterId),
    /// Public chat.
    Everyone,
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Gm => write!(f, "gm"),
            Audience::Player(player) => write!(f, "player {player}"),
            Audience::Controllers(character) => write!(f, "controllers of {character}"),
            Audience::Everyone => write!(f, "everyone"),
        }
    }
}

/// Active conditions of one token, for `!cc show`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetConditions {
    pub name: String,
    pub conditions: Vec<(ConditionKind, u32)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// GM view of an added condition.
    ConditionAdded {
        character: String,
        condition: ConditionKind,
        duration: Option<u32>,
    },
    /// Controller view of an added condition.
    ConditionGained { condition: ConditionKind },
    /// GM view of a removed or expired condition.
    ConditionRemoved {
        character: String,
        condition: ConditionKind,
    },
    /// Controller view of a removed or expired condition.
    ConditionLost { condition: ConditionKind },
    ActiveConditions(Vec<TargetConditions>),
    ConditionList(Vec<ConditionKind>),
    ConditionReference {
        condition: ConditionKind,
        text: &'static str,
    },
    ConditionNotFound { name: String },
    /// Single-line failure reported to whoever asked.
    Failure(String),
}

impl Notice {
    pub fn failure(message: impl fmt::Display) -> Self {
        Self::Failure(message.to_string())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ConditionAdded {
                character,
                condition,
                duration,
            } => {
                write!(
                    f,
                    "Added {} to {}",
                    capitalize(condition.name()),
                    capitalize(character)
                )?;
                if let Some(duration) = duration {
                    write!(f, " (duration: {duration})")?;
                }
                Ok(())
            }
            Notice::ConditionGained { condition } => write!(
                f,
                "You now have the {} condition",
                capitalize(condition.name())
            ),
            Notice::ConditionRemoved {
                character,
                condition,
            } => write!(
                f,
                "Removed {} from {}",
                capitalize(condition.name()),
                capitalize(character)
            ),
            Notice::ConditionLost { condition } => write!(
                f,
                "You no longer have the {} condition",
                capitalize(condition.name())
            ),
            Notice::ActiveConditions(targets) => {
                if targets.is_empty() {
                    return write!(f, "No active conditions");
                }
                for (i, target) in targets.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}:", target.name)?;
                    for (condition, duration) in &target.conditions {
                        write!(
                            f,
                            "\n  - {} (duration: {duration})",
                            capitalize(condition.name())
                        )?;
                    }
                }
                Ok(())
            }
            Notice::ConditionList(conditions) => {
                write!(f, "Conditions")?;
                for condition in conditions {
                    write!(f, "\n  - {}", capitalize(condition.name()))?;
                }
                Ok(())
            }
            Notice::ConditionReference { condition, text } => {
                write!(f, "{}\n{text}", capitalize(condition.name()))
            }
            Notice::ConditionNotFound { name } => write!(f, "Condition {name} not found."),
            Notice::Failure(message) => f.write_str(message),
        }
    }
}
