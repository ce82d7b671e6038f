//! Chat command parsing and dispatch.
//!
//! `!cc` manages conditions on the selected tokens and is reserved for the
//! GM. `!cond` is a rules reference anyone may use.

use tracker_content::describe;
use tracker_core::{ActorId, ConditionKind, ErrorSeverity, PlayerId, TrackerError};

use crate::error::Result;
use crate::gateway::{Audience, Notice};
use crate::tracker::ConditionTracker;

/// A chat line together with who sent it and what they had selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub player: PlayerId,
    pub content: String,
    pub selected: Vec<ActorId>,
}

impl ChatMessage {
    pub fn new(player: impl Into<PlayerId>, content: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            content: content.into(),
            selected: Vec::new(),
        }
    }

    pub fn with_selected(mut self, selected: impl IntoIterator<Item = ActorId>) -> Self {
        self.selected = selected.into_iter().collect();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatCommand {
    Conditions(ConditionCommand),
    Reference(ReferenceQuery),
}

/// `!cc` subcommands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConditionCommand {
    Add {
        condition: String,
        duration: Option<String>,
    },
    Remove {
        condition: String,
    },
    Clear,
    Show,
    /// Unknown subcommand, or one missing its condition.
    Invalid(String),
}

/// `!cond` queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceQuery {
    List,
    Describe(String),
}

impl ChatCommand {
    /// Parses a chat line. Returns `None` for lines addressed to someone else.
    pub fn parse(content: &str) -> Option<Self> {
        let mut words = content.split_whitespace();
        match words.next()? {
            "!cc" => {
                let sub = words.next().unwrap_or_default();
                let command = match sub {
                    "add" => match words.next() {
                        Some(condition) => ConditionCommand::Add {
                            condition: condition.to_owned(),
                            duration: words.next().map(str::to_owned),
                        },
                        None => ConditionCommand::Invalid(sub.to_owned()),
                    },
                    "remove" => match words.next() {
                        Some(condition) => ConditionCommand::Remove {
                            condition: condition.to_owned(),
                        },
                        None => ConditionCommand::Invalid(sub.to_owned()),
                    },
                    "clear" => ConditionCommand::Clear,
                    "show" => ConditionCommand::Show,
                    other => ConditionCommand::Invalid(other.to_owned()),
                };
                Some(Self::Conditions(command))
            }
            "!cond" => Some(Self::Reference(match words.next() {
                None | Some("list") => ReferenceQuery::List,
                Some(name) => ReferenceQuery::Describe(name.to_owned()),
            })),
            _ => None,
        }
    }
}

/// Parses a `!cc add` duration. `0` means untimed.
pub fn parse_duration(text: Option<&str>) -> std::result::Result<Option<u32>, TrackerError> {
    let Some(text) = text else {
        return Ok(None);
    };
    let value: u32 = text.parse().map_err(|_| TrackerError::InvalidDuration {
        value: text.to_owned(),
    })?;
    Ok((value > 0).then_some(value))
}

impl ConditionTracker {
    /// Handles one chat line. Failures are reported to the sender; nothing
    /// here stops the event loop.
    pub fn handle_chat(&self, message: &ChatMessage) {
        match ChatCommand::parse(&message.content) {
            Some(ChatCommand::Conditions(command)) => self.run_condition_command(message, command),
            Some(ChatCommand::Reference(query)) => self.run_reference_query(&message.player, query),
            None => {}
        }
    }

    fn run_condition_command(&self, message: &ChatMessage, command: ConditionCommand) {
        let requester = &message.player;
        if !self.is_gm(requester) {
            tracing::warn!(player = %requester, "non-GM tried to use !cc");
            self.whisper(
                requester,
                &Notice::failure("!cc can only be used by the GM"),
            );
            return;
        }

        if message.selected.is_empty() && !matches!(command, ConditionCommand::Show) {
            tracing::debug!(player = %requester, "!cc with no tokens selected");
        }

        match command {
            ConditionCommand::Add {
                condition,
                duration,
            } => {
                let duration = match parse_duration(duration.as_deref()) {
                    Ok(duration) => duration,
                    Err(error) => return self.report(requester, Err(error.into())),
                };
                for token in &message.selected {
                    self.report(requester, self.add_condition(token, &condition, duration));
                }
            }
            ConditionCommand::Remove { condition } => {
                for token in &message.selected {
                    let result = self.remove_condition(token, &condition).map(|_| ());
                    self.report(requester, result);
                }
            }
            ConditionCommand::Clear => {
                for token in &message.selected {
                    let result = self.clear_conditions(token).map(|_| ());
                    self.report(requester, result);
                }
            }
            ConditionCommand::Show => self.report(requester, self.show_conditions(requester)),
            ConditionCommand::Invalid(sub) => {
                tracing::warn!(player = %requester, subcommand = %sub, "invalid !cc subcommand");
                self.whisper(
                    requester,
                    &Notice::failure(format!("invalid command: !cc {sub}")),
                );
            }
        }
    }

    fn run_reference_query(&self, player: &PlayerId, query: ReferenceQuery) {
        let audience = if self.is_gm(player) {
            Audience::Everyone
        } else {
            Audience::Player(player.clone())
        };

        match query {
            ReferenceQuery::List => {
                self.notify(
                    &audience,
                    &Notice::ConditionList(ConditionKind::all().collect()),
                );
            }
            ReferenceQuery::Describe(name) => match ConditionKind::parse(&name) {
                Ok(condition) => self.notify(
                    &audience,
                    &Notice::ConditionReference {
                        condition,
                        text: describe(condition),
                    },
                ),
                Err(_) => self.whisper(player, &Notice::ConditionNotFound { name }),
            },
        }
    }

    fn report(&self, requester: &PlayerId, result: Result<()>) {
        let Err(error) = result else {
            return;
        };
        match error.severity() {
            ErrorSeverity::Internal => tracing::error!(%error, "command failed"),
            _ => tracing::warn!(%error, "command rejected"),
        }
        self.whisper(requester, &Notice::failure(&error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_condition_commands() {
        assert_eq!(
            ChatCommand::parse("!cc add shaken 2"),
            Some(ChatCommand::Conditions(ConditionCommand::Add {
                condition: "shaken".into(),
                duration: Some("2".into()),
            }))
        );
        assert_eq!(
            ChatCommand::parse("!cc  remove   prone"),
            Some(ChatCommand::Conditions(ConditionCommand::Remove {
                condition: "prone".into()
            }))
        );
        assert_eq!(
            ChatCommand::parse("!cc dance"),
            Some(ChatCommand::Conditions(ConditionCommand::Invalid("dance".into())))
        );
        assert_eq!(
            ChatCommand::parse("!cc add"),
            Some(ChatCommand::Conditions(ConditionCommand::Invalid("add".into())))
        );
    }

    #[test]
    fn parses_reference_queries() {
        assert_eq!(
            ChatCommand::parse("!cond"),
            Some(ChatCommand::Reference(ReferenceQuery::List))
        );
        assert_eq!(
            ChatCommand::parse("!cond list"),
            Some(ChatCommand::Reference(ReferenceQuery::List))
        );
        assert_eq!(
            ChatCommand::parse("!cond Prone"),
            Some(ChatCommand::Reference(ReferenceQuery::Describe("Prone".into())))
        );
        assert_eq!(ChatCommand::parse("hello table"), None);
        assert_eq!(ChatCommand::parse(""), None);
    }

    #[test]
    fn durations() {
        assert_eq!(parse_duration(None), Ok(None));
        assert_eq!(parse_duration(Some("0")), Ok(None));
        assert_eq!(parse_duration(Some("3")), Ok(Some(3)));
        assert_eq!(
            parse_duration(Some("three")),
            Err(TrackerError::InvalidDuration {
                value: "three".into()
            })
        );
        assert!(parse_duration(Some("-1")).is_err());
    }
}
