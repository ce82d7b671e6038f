use crate::error::{Result, TrackerError};
use crate::ledger::ConditionLedger;
use crate::state::{ActorId, ConditionInstance, ConditionKind, Round, TurnOrder};

use super::{NonAdvance, TurnTransition};

/// Result of a single countdown step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// Duration dropped and the instance was written back.
    Decremented(ConditionInstance),
    /// Duration reached zero and the instance left the ledger. The caller
    /// owns the marker removal and notifications.
    Expired(ConditionInstance),
    /// The instance was already counted down in this round.
    AlreadyCounted(ConditionInstance),
}

/// Everything a turn-order-changed event did to the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownReport {
    pub transition: TurnTransition,
    pub outcomes: Vec<CountdownOutcome>,
}

impl CountdownReport {
    /// Report for an event that was not a turn passing.
    pub fn unchanged(reason: NonAdvance) -> Self {
        Self {
            transition: TurnTransition::Unchanged(reason),
            outcomes: Vec::new(),
        }
    }

    pub fn expired(&self) -> impl Iterator<Item = &ConditionInstance> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CountdownOutcome::Expired(c) => Some(c),
            _ => None,
        })
    }

    pub fn decremented(&self) -> impl Iterator<Item = &ConditionInstance> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CountdownOutcome::Decremented(c) => Some(c),
            _ => None,
        })
    }

    /// True if any outcome changed the ledger.
    pub fn touched_ledger(&self) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| !matches!(outcome, CountdownOutcome::AlreadyCounted(_)))
    }
}

/// Duration state machine driven by turn-order transitions.
///
/// The engine borrows the ledger for the span of one event. Turn order
/// snapshots and the round are supplied by the caller, read once per event,
/// so nothing here re-reads state it has just mutated.
pub struct CountdownEngine<'a> {
    ledger: &'a mut ConditionLedger,
}

impl<'a> CountdownEngine<'a> {
    pub fn new(ledger: &'a mut ConditionLedger) -> Self {
        Self { ledger }
    }

    /// Starts (or restarts) a timed condition governed by whoever holds the
    /// head of `order`.
    ///
    /// Fails with [`TrackerError::EmptyTurnOrder`] when nobody is active;
    /// callers treat that as "no duration recorded".
    pub fn track(
        &mut self,
        order: &TurnOrder,
        target: ActorId,
        condition: ConditionKind,
        duration: u32,
        round: Round,
    ) -> Result<ConditionInstance> {
        if duration == 0 {
            return Err(TrackerError::InvalidDuration {
                value: duration.to_string(),
            });
        }
        let actor = order.active_actor().ok_or(TrackerError::EmptyTurnOrder)?;
        let instance = ConditionInstance::new(actor.clone(), target, condition, duration, round);
        self.ledger.set(instance.clone());
        Ok(instance)
    }

    /// Reacts to a turn-order change.
    ///
    /// When a turn genuinely passed, counts down every instance governed by
    /// the newly active entry, and every instance borne by it whose governing
    /// entry is no longer in the order.
    pub fn on_turn_order_changed(
        &mut self,
        previous: &TurnOrder,
        current: &TurnOrder,
        round: Round,
    ) -> CountdownReport {
        let transition = TurnTransition::classify(previous, current);
        let active = match &transition {
            TurnTransition::Advance { active } => active.clone(),
            TurnTransition::Unchanged(reason) => {
                tracing::debug!(
                    reason = reason.as_str(),
                    "turn order changed without a new actor"
                );
                return CountdownReport::unchanged(*reason);
            }
        };

        tracing::debug!(actor = %active, %round, "handling turn order change");

        let mut due = self.ledger.find_by_actor(&active);
        due.extend(
            self.ledger
                .find_by_target(&active)
                .into_iter()
                .filter(|c| !current.contains(&c.actor)),
        );

        let outcomes = due
            .into_iter()
            .filter_map(|c| self.countdown(&c.target, c.condition, round))
            .collect();

        CountdownReport {
            transition,
            outcomes,
        }
    }

    /// Applies one countdown step to the instance stored under
    /// `(target, condition)`. Returns `None` if there is no such instance.
    pub fn countdown(
        &mut self,
        target: &ActorId,
        condition: ConditionKind,
        round: Round,
    ) -> Option<CountdownOutcome> {
        let mut instance = self.ledger.get(target, condition)?.clone();

        if round <= instance.updated_on_round {
            tracing::trace!(
                token = %target,
                %condition,
                %round,
                "condition already counted down this round"
            );
            return Some(CountdownOutcome::AlreadyCounted(instance));
        }

        instance.duration = instance.duration.saturating_sub(1);
        instance.updated_on_round = round;

        if instance.duration == 0 {
            self.ledger.remove(target, condition);
            tracing::info!(token = %target, %condition, %round, "condition expired");
            Some(CountdownOutcome::Expired(instance))
        } else {
            tracing::debug!(
                token = %target,
                %condition,
                duration = instance.duration,
                "condition counted down"
            );
            self.ledger.set(instance.clone());
            Some(CountdownOutcome::Decremented(instance))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TurnEntry;

    fn order(ids: &[&str]) -> TurnOrder {
        ids.iter().map(|id| TurnEntry::new(*id, "0")).collect()
    }

    fn tracked(
        ledger: &mut ConditionLedger,
        actor: &str,
        target: &str,
        duration: u32,
        round: u32,
    ) {
        ledger.set(ConditionInstance::new(
            ActorId::new(actor),
            ActorId::new(target),
            ConditionKind::Shaken,
            duration,
            Round(round),
        ));
    }

    fn duration_of(ledger: &ConditionLedger, target: &str) -> Option<u32> {
        ledger
            .get(&ActorId::new(target), ConditionKind::Shaken)
            .map(|c| c.duration)
    }

    #[test]
    fn track_captures_the_active_actor() {
        let mut ledger = ConditionLedger::new();
        let mut engine = CountdownEngine::new(&mut ledger);

        let instance = engine
            .track(
                &order(&["a1", "t1", "-1"]),
                ActorId::new("t1"),
                ConditionKind::Shaken,
                2,
                Round::ZERO,
            )
            .unwrap();

        assert_eq!(instance.actor, "a1");
        assert_eq!(instance.updated_on_round, Round::ZERO);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn track_requires_someone_to_be_active() {
        let mut ledger = ConditionLedger::new();
        let result = CountdownEngine::new(&mut ledger).track(
            &TurnOrder::new(),
            ActorId::new("t1"),
            ConditionKind::Shaken,
            2,
            Round::ZERO,
        );
        assert_eq!(result, Err(TrackerError::EmptyTurnOrder));
        assert!(ledger.is_empty());
    }

    #[test]
    fn governing_actor_turn_counts_down_once_per_round() {
        let mut ledger = ConditionLedger::new();
        tracked(&mut ledger, "a1", "t1", 3, 0);
        let mut engine = CountdownEngine::new(&mut ledger);

        let report = engine.on_turn_order_changed(
            &order(&["t1", "-1", "a1"]),
            &order(&["a1", "t1", "-1"]),
            Round(1),
        );
        assert_eq!(report.decremented().count(), 1);

        // A second qualifying event in the same round must not count again.
        let report = engine.on_turn_order_changed(
            &order(&["t1", "-1", "a1"]),
            &order(&["a1", "t1", "-1"]),
            Round(1),
        );
        assert!(matches!(
            report.outcomes.as_slice(),
            [CountdownOutcome::AlreadyCounted(_)]
        ));

        assert_eq!(duration_of(&ledger, "t1"), Some(2));
    }

    #[test]
    fn non_advances_touch_nothing() {
        let mut ledger = ConditionLedger::new();
        tracked(&mut ledger, "a1", "t1", 1, 0);
        let mut engine = CountdownEngine::new(&mut ledger);

        let same_head = engine.on_turn_order_changed(
            &order(&["a1", "t1", "-1"]),
            &order(&["a1", "-1", "t1"]),
            Round(5),
        );
        let resized = engine.on_turn_order_changed(
            &order(&["t1", "-1"]),
            &order(&["a1", "t1", "-1"]),
            Round(5),
        );

        assert!(same_head.outcomes.is_empty());
        assert!(resized.outcomes.is_empty());
        assert_eq!(duration_of(&ledger, "t1"), Some(1));
    }

    #[test]
    fn target_turn_drives_countdown_when_actor_left() {
        let mut ledger = ConditionLedger::new();
        tracked(&mut ledger, "a1", "t1", 3, 0);
        let mut engine = CountdownEngine::new(&mut ledger);

        let report = engine.on_turn_order_changed(
            &order(&["x", "t1", "-1"]),
            &order(&["t1", "-1", "x"]),
            Round(1),
        );

        assert_eq!(report.decremented().count(), 1);
        assert_eq!(duration_of(&ledger, "t1"), Some(2));
    }

    #[test]
    fn target_turn_is_ignored_while_actor_is_present() {
        let mut ledger = ConditionLedger::new();
        tracked(&mut ledger, "a1", "t1", 3, 0);
        let mut engine = CountdownEngine::new(&mut ledger);

        let report = engine.on_turn_order_changed(
            &order(&["a1", "t1", "-1"]),
            &order(&["t1", "-1", "a1"]),
            Round(1),
        );

        assert!(report.outcomes.is_empty());
        assert_eq!(duration_of(&ledger, "t1"), Some(3));
    }

    #[test]
    fn last_turn_expires_and_removes() {
        let mut ledger = ConditionLedger::new();
        tracked(&mut ledger, "a1", "t1", 1, 0);
        let mut engine = CountdownEngine::new(&mut ledger);

        let report = engine.on_turn_order_changed(
            &order(&["t1", "-1", "a1"]),
            &order(&["a1", "t1", "-1"]),
            Round(1),
        );

        let expired: Vec<_> = report.expired().collect();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].duration, 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn countdown_of_missing_instance_is_none() {
        let mut ledger = ConditionLedger::new();
        let mut engine = CountdownEngine::new(&mut ledger);
        let outcome = engine.countdown(&ActorId::new("t1"), ConditionKind::Prone, Round(1));
        assert!(outcome.is_none());
    }
}
