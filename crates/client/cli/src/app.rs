//! Glue code tying the host simulation, bootstrap and tracker together.
use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use tracker_bootstrap::{CliConfig, TrackerSetupBuilder};
use tracker_core::{ActorId, PlayerId, RoundCounter, TurnOrder};
use tracker_runtime::{ConditionTracker, HostEvent, InMemoryMarkers, InMemoryRoster};

use crate::console::ConsoleNotifier;
use crate::host::Host;
use crate::input::{HELP, HostCommand};

pub struct CliApp {
    host: Host,
    tracker: ConditionTracker,
}

impl CliApp {
    pub fn build(config: CliConfig) -> Result<Self> {
        let markers = Arc::new(InMemoryMarkers::new());
        let roster = Arc::new(InMemoryRoster::new());
        roster.add_gm(config.gm_player.clone());

        let setup = TrackerSetupBuilder::new(
            config,
            markers.clone(),
            Arc::new(ConsoleNotifier),
            roster.clone(),
        )
        .build()?;

        let gm = PlayerId::new(setup.config.gm_player.clone());
        let host = Host::new(setup.turn_order.clone(), markers, roster, gm);

        setup.tracker.handle(&HostEvent::Ready)?;
        tracing::info!(
            session = setup.config.session_id(),
            "host simulation starting"
        );

        Ok(Self {
            host,
            tracker: setup.tracker,
        })
    }

    /// Reads commands until end of input or `quit`. Failed commands are
    /// reported and the loop carries on.
    pub fn run(mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "condition tracker ready as {}, type help",
            self.host.player()
        )?;

        for line in input.lines() {
            let line = line?;
            let Some(command) = HostCommand::parse(&line) else {
                continue;
            };
            if command == HostCommand::Quit {
                break;
            }
            if let Err(error) = self.execute(command, out) {
                tracing::error!(%error, "command failed");
                writeln!(out, "error: {error:#}")?;
            }
        }

        tracing::info!("host simulation finished");
        Ok(())
    }

    fn execute(&mut self, command: HostCommand, out: &mut impl Write) -> Result<()> {
        match command {
            HostCommand::Open => {
                self.deliver(HostEvent::InitiativeOpened)?;
                write_order(out, &self.host.order()?)?;
            }
            HostCommand::Join { token, priority } => {
                let event = self.host.join(ActorId::new(token), priority)?;
                self.deliver(event)?;
            }
            HostCommand::Leave { token } => match self.host.leave(&ActorId::new(&token))? {
                Some(event) => self.deliver(event)?,
                None => writeln!(out, "{token} is not in the turn order")?,
            },
            HostCommand::Next => match self.host.next()? {
                Some(event) => {
                    self.deliver(event)?;
                    let order = self.host.order()?;
                    if let Some(head) = order.head() {
                        writeln!(
                            out,
                            "up: {}",
                            label(head.id.as_str(), head.custom.as_deref())
                        )?;
                    }
                }
                None => writeln!(out, "the turn order is empty")?,
            },
            HostCommand::Order => write_order(out, &self.host.order()?)?,
            HostCommand::Token {
                token,
                character,
                controlled,
            } => self.host.declare(ActorId::new(token), &character, controlled),
            HostCommand::Select(tokens) => {
                self.host.select(tokens.into_iter().map(ActorId::new).collect());
                writeln!(out, "selected: {}", join(self.host.selected()))?;
            }
            HostCommand::As(player) => {
                self.host.set_player(PlayerId::new(player));
                writeln!(out, "speaking as {}", self.host.player())?;
            }
            HostCommand::Markers(token) => {
                let tags = self.host.markers().markers_on(&ActorId::new(&token));
                writeln!(out, "{token}: {}", join(&tags))?;
            }
            HostCommand::Chat(line) => {
                let event = self.host.chat(line);
                self.deliver(event)?;
            }
            HostCommand::Help => writeln!(out, "{HELP}")?,
            HostCommand::Quit => {}
            HostCommand::Invalid(reason) => writeln!(out, "{reason}")?,
        }
        Ok(())
    }

    fn deliver(&self, event: HostEvent) -> Result<()> {
        self.tracker.handle(&event)?;
        Ok(())
    }
}

fn write_order(out: &mut impl Write, order: &TurnOrder) -> Result<()> {
    if let Some(round) = RoundCounter::read(order) {
        match round {
            Ok(round) => writeln!(out, "round {round}")?,
            Err(error) => writeln!(out, "round unknown: {error}")?,
        }
    }
    for (i, entry) in order.iter().enumerate() {
        let marker = if i == 0 { ">" } else { " " };
        writeln!(
            out,
            "{marker} {} ({})",
            label(entry.id.as_str(), entry.custom.as_deref()),
            entry.priority
        )?;
    }
    Ok(())
}

fn label<'a>(id: &'a str, custom: Option<&'a str>) -> &'a str {
    custom.unwrap_or(id)
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        CliApp::build(CliConfig::default())
            .unwrap()
            .run(script.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn next_rotates_the_order_and_counts_rounds() {
        let out = run("open\njoin valeros 20\njoin goblin 10\nnext\norder\nquit\nnext\n");

        assert!(out.contains("up: valeros"), "{out}");
        assert!(out.contains("round 1"), "{out}");
        assert!(out.contains("> valeros (20)"), "{out}");
        assert!(out.contains("  Round counter (1)"), "{out}");
    }

    #[test]
    fn gm_condition_commands_reach_the_markers() {
        let out = run(
            "open\njoin valeros 20\njoin goblin 10\nnext\n\
             select goblin\n!cc add shaken 2\nmarkers goblin\n",
        );
        assert!(out.contains("goblin: path-condition-shaken"), "{out}");
    }

    #[test]
    fn bad_lines_do_not_stop_the_loop() {
        let out = run("leave nobody\ndance\nhelp\n");
        assert!(out.contains("nobody is not in the turn order"));
        assert!(out.contains("unknown command dance"));
        assert!(out.contains("condition reference"));
    }
}
