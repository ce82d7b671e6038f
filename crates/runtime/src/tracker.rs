//! Condition tracker orchestrator and builder.
//!
//! [`ConditionTracker`] ties the pure engine in `tracker-core` to storage and
//! the host. Every public operation reads fresh snapshots from the
//! repositories, runs the engine and writes back, so each call runs to
//! completion on its own.

use std::slice;
use std::sync::Arc;

use tracker_content::{MarkerCatalog, MarkerSet, MarkerTag};
use tracker_core::{
    ActorId, ConditionKind, CountdownEngine, CountdownReport, PlayerId, Round, RoundCounter,
    TrackerConfig, TrackerError, TurnOrder, TurnTransition,
};

use crate::error::{GatewayKind, Result, RuntimeError};
use crate::gateway::{Audience, MarkerGateway, Notice, Notifier, Roster, TargetConditions};
use crate::repository::{
    InMemoryLedgerRepo, InMemoryTurnOrderRepo, LedgerRepository, TurnOrderRepository,
};

/// Tracks timed conditions on tokens and counts them down as turns pass.
pub struct ConditionTracker {
    config: TrackerConfig,
    catalog: MarkerCatalog,
    turn_order: Arc<dyn TurnOrderRepository>,
    ledger: Arc<dyn LedgerRepository>,
    markers: Arc<dyn MarkerGateway>,
    notifier: Arc<dyn Notifier>,
    roster: Arc<dyn Roster>,
}

impl ConditionTracker {
    pub fn builder() -> TrackerBuilder {
        TrackerBuilder::new()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    /// Creates the ledger document when the session has none.
    pub fn init(&self) -> Result<()> {
        let ledger = self.ledger.init()?;
        tracing::info!(conditions = ledger.len(), "condition tracker ready");
        Ok(())
    }

    /// Forgets every tracked condition. Markers on tokens are left alone.
    pub fn reset(&self) -> Result<()> {
        self.ledger.reset()?;
        Ok(())
    }

    /// The initiative view was (re)opened: empty the order and install a
    /// fresh round counter.
    pub fn open_initiative(&self) -> Result<TurnOrder> {
        let mut order = TurnOrder::new();
        RoundCounter::new(&self.config).reset(&mut order);
        self.turn_order.write(&order)?;
        Ok(order)
    }

    /// Current round, creating the round counter if the order lacks one.
    pub fn current_round(&self) -> Result<Round> {
        let mut order = self.turn_order.read()?;
        self.round_of(&mut order)
    }

    /// Applies `name` to `target`, timed by the active turn when `duration`
    /// is positive.
    pub fn add_condition(
        &self,
        target: &ActorId,
        name: &str,
        duration: Option<u32>,
    ) -> Result<()> {
        let condition = ConditionKind::parse(name)?;
        let duration = duration.filter(|d| *d > 0);

        // Record first: a bad round counter must leave the token untouched.
        if let Some(duration) = duration {
            self.track(target, condition, duration)?;
        }

        if let Some(tag) = self.tag_for(condition) {
            self.markers.add_marker(target, tag);
        }

        tracing::info!(token = %target, %condition, ?duration, "condition added");

        self.announce(
            target,
            |character| Notice::ConditionAdded {
                character,
                condition,
                duration,
            },
            Notice::ConditionGained { condition },
        );
        Ok(())
    }

    /// Removes `name` from `target`. Returns false when there was nothing to
    /// remove.
    pub fn remove_condition(&self, target: &ActorId, name: &str) -> Result<bool> {
        let condition = ConditionKind::parse(name)?;
        self.remove_kind(target, condition)
    }

    /// Removes every known condition from `target`; returns how many were
    /// present.
    pub fn clear_conditions(&self, target: &ActorId) -> Result<usize> {
        let mut removed = 0;
        for condition in ConditionKind::all() {
            if self.remove_kind(target, condition)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Whispers the tracked conditions of every token in the turn order to
    /// `requester`, grouped by token.
    pub fn show_conditions(&self, requester: &PlayerId) -> Result<()> {
        let order = self.turn_order_or_empty();
        let ledger = self.ledger.read()?;

        let mut targets: Vec<(&ActorId, TargetConditions)> = Vec::new();
        for instance in ledger.iter().filter(|c| order.contains(&c.target)) {
            let entry = (instance.condition, instance.duration);
            match targets.iter_mut().find(|(t, _)| *t == &instance.target) {
                Some((_, listed)) => listed.conditions.push(entry),
                None => {
                    let name = self
                        .roster
                        .character_for(&instance.target)
                        .map(|character| character.name)
                        .unwrap_or_else(|| instance.target.to_string());
                    targets.push((
                        &instance.target,
                        TargetConditions {
                            name,
                            conditions: vec![entry],
                        },
                    ));
                }
            }
        }

        let targets = targets.into_iter().map(|(_, listed)| listed).collect();
        self.whisper(requester, &Notice::ActiveConditions(targets));
        Ok(())
    }

    /// Reacts to the host changing the turn order.
    ///
    /// Non-advances return without reading the round. On a genuine advance
    /// the round is read from `current`, the engine runs against the stored
    /// ledger, and expired conditions lose their marker and are announced.
    pub fn handle_turn_order_changed(
        &self,
        previous: &TurnOrder,
        current: &TurnOrder,
    ) -> Result<CountdownReport> {
        if let TurnTransition::Unchanged(reason) = TurnTransition::classify(previous, current) {
            tracing::debug!(
                reason = reason.as_str(),
                "turn order changed without a new actor"
            );
            return Ok(CountdownReport::unchanged(reason));
        }

        let mut snapshot = current.clone();
        let round = self.round_of(&mut snapshot).inspect_err(|error| {
            tracing::error!(%error, "skipping countdown, round counter unreadable");
        })?;

        let mut ledger = self.ledger.read()?;
        let report =
            CountdownEngine::new(&mut ledger).on_turn_order_changed(previous, current, round);
        if report.touched_ledger() {
            self.ledger.write(&ledger)?;
        }

        for instance in report.expired() {
            if let Some(tag) = self.tag_for(instance.condition) {
                self.markers
                    .remove_markers(&instance.target, slice::from_ref(tag));
            }
            self.announce_removed(&instance.target, instance.condition);
        }

        Ok(report)
    }

    pub(crate) fn is_gm(&self, player: &PlayerId) -> bool {
        self.roster.is_gm(player)
    }

    pub(crate) fn notify(&self, audience: &Audience, notice: &Notice) {
        self.notifier.notify(audience, notice);
    }

    pub(crate) fn whisper(&self, player: &PlayerId, notice: &Notice) {
        self.notifier.notify(&Audience::Player(player.clone()), notice);
    }

    /// Stored turn order; unreadable text counts as an empty order.
    pub(crate) fn turn_order_or_empty(&self) -> TurnOrder {
        self.turn_order.read().unwrap_or_else(|error| {
            tracing::error!(%error, "stored turn order unreadable, treating as empty");
            TurnOrder::new()
        })
    }

    /// Reads the round from `order`, writing the order back when the round
    /// counter had to be inserted or repaired.
    fn round_of(&self, order: &mut TurnOrder) -> Result<Round> {
        let reading = RoundCounter::new(&self.config).current_round(order)?;
        if reading.modified {
            self.turn_order.write(order)?;
        }
        Ok(reading.round)
    }

    fn track(&self, target: &ActorId, condition: ConditionKind, duration: u32) -> Result<()> {
        let mut order = self.turn_order.read()?;
        if order.is_empty() {
            tracing::debug!(token = %target, %condition, "no active turn, duration not recorded");
            return Ok(());
        }

        let round = self.round_of(&mut order)?;
        let mut ledger = self.ledger.read()?;

        match CountdownEngine::new(&mut ledger).track(
            &order,
            target.clone(),
            condition,
            duration,
            round,
        ) {
            Ok(instance) => {
                tracing::debug!(
                    actor = %instance.actor,
                    token = %target,
                    %condition,
                    duration,
                    %round,
                    "tracking condition"
                );
                self.ledger.write(&ledger)?;
                Ok(())
            }
            Err(TrackerError::EmptyTurnOrder) => Ok(()),
            Err(error) => Err(error.into()),
        }
    }

    fn remove_kind(&self, target: &ActorId, condition: ConditionKind) -> Result<bool> {
        let removed = match self.tag_for(condition) {
            Some(tag) => {
                if !self.markers.has_marker(target, tag) {
                    return Ok(false);
                }
                self.forget(target, condition)?;
                self.markers.remove_markers(target, slice::from_ref(tag));
                true
            }
            None => self.forget(target, condition)?,
        };

        if removed {
            tracing::info!(token = %target, %condition, "condition removed");
            self.announce_removed(target, condition);
        }
        Ok(removed)
    }

    /// Drops the ledger entry, returning whether there was one.
    fn forget(&self, target: &ActorId, condition: ConditionKind) -> Result<bool> {
        let mut ledger = self.ledger.read()?;
        let removed = ledger.remove(target, condition).is_some();
        if removed {
            self.ledger.write(&ledger)?;
        }
        Ok(removed)
    }

    fn tag_for(&self, condition: ConditionKind) -> Option<&MarkerTag> {
        self.catalog.tag_for(condition).ok()
    }

    fn announce_removed(&self, target: &ActorId, condition: ConditionKind) {
        self.announce(
            target,
            |character| Notice::ConditionRemoved {
                character,
                condition,
            },
            Notice::ConditionLost { condition },
        );
    }

    /// Tells the GM, and the character's controllers when it has any.
    fn announce(&self, target: &ActorId, gm: impl FnOnce(String) -> Notice, controllers: Notice) {
        let Some(character) = self.roster.character_for(target) else {
            tracing::debug!(token = %target, "token represents no character, nobody to notify");
            return;
        };

        if character.controlled {
            self.notify(&Audience::Controllers(character.id.clone()), &controllers);
        }
        self.notify(&Audience::Gm, &gm(character.name));
    }
}

/// Builder for [`ConditionTracker`].
///
/// Repositories default to in-memory backends; the three host gateways are
/// required.
pub struct TrackerBuilder {
    config: TrackerConfig,
    catalog: MarkerCatalog,
    turn_order: Option<Arc<dyn TurnOrderRepository>>,
    ledger: Option<Arc<dyn LedgerRepository>>,
    markers: Option<Arc<dyn MarkerGateway>>,
    notifier: Option<Arc<dyn Notifier>>,
    roster: Option<Arc<dyn Roster>>,
}

impl TrackerBuilder {
    fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            catalog: MarkerCatalog::standalone(MarkerSet::default()),
            turn_order: None,
            ledger: None,
            markers: None,
            notifier: None,
            roster: None,
        }
    }

    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Marker set and host tag library used to show conditions on tokens.
    pub fn catalog(mut self, catalog: MarkerCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn turn_order(mut self, repo: Arc<dyn TurnOrderRepository>) -> Self {
        self.turn_order = Some(repo);
        self
    }

    pub fn ledger(mut self, repo: Arc<dyn LedgerRepository>) -> Self {
        self.ledger = Some(repo);
        self
    }

    pub fn markers(mut self, markers: Arc<dyn MarkerGateway>) -> Self {
        self.markers = Some(markers);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn roster(mut self, roster: Arc<dyn Roster>) -> Self {
        self.roster = Some(roster);
        self
    }

    pub fn build(self) -> Result<ConditionTracker> {
        let missing = |kind| RuntimeError::GatewayNotSet { kind };

        Ok(ConditionTracker {
            config: self.config,
            catalog: self.catalog,
            turn_order: self
                .turn_order
                .unwrap_or_else(|| Arc::new(InMemoryTurnOrderRepo::new())),
            ledger: self
                .ledger
                .unwrap_or_else(|| Arc::new(InMemoryLedgerRepo::new())),
            markers: self.markers.ok_or_else(|| missing(GatewayKind::Markers))?,
            notifier: self.notifier.ok_or_else(|| missing(GatewayKind::Notifier))?,
            roster: self.roster.ok_or_else(|| missing(GatewayKind::Roster))?,
        })
    }
}
