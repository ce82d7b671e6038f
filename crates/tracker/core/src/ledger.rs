//! Collection of active condition instances keyed by `(target, condition)`.

use crate::state::{ActorId, ConditionInstance, ConditionKind};

/// Sole owner of every active [`ConditionInstance`].
///
/// Invariants:
/// - at most one instance per `(target, condition)` key
/// - every stored instance has `duration >= 1`
///
/// Most recently set instances come first; nothing relies on that order
/// beyond display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionLedger {
    conditions: Vec<ConditionInstance>,
}

impl ConditionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from stored instances, restoring the invariants:
    /// zero durations are dropped and the first instance of a key wins.
    pub fn from_instances(instances: Vec<ConditionInstance>) -> Self {
        let mut conditions: Vec<ConditionInstance> = Vec::with_capacity(instances.len());
        for instance in instances {
            if instance.duration == 0 {
                tracing::warn!(
                    token = %instance.target,
                    condition = %instance.condition,
                    "dropping stored condition with zero duration"
                );
                continue;
            }
            if conditions
                .iter()
                .any(|c| c.has_key(&instance.target, instance.condition))
            {
                tracing::warn!(
                    token = %instance.target,
                    condition = %instance.condition,
                    "dropping duplicate stored condition"
                );
                continue;
            }
            conditions.push(instance);
        }
        Self { conditions }
    }

    /// Inserts or replaces the instance stored under the same key.
    ///
    /// The new instance goes to the front. An instance with zero duration is
    /// never stored; setting one only removes the previous instance.
    /// Returns the instance that was replaced, if any.
    pub fn set(&mut self, instance: ConditionInstance) -> Option<ConditionInstance> {
        let previous = self.remove(&instance.target, instance.condition);
        if instance.duration == 0 {
            return previous;
        }
        tracing::debug!(
            token = %instance.target,
            condition = %instance.condition,
            duration = instance.duration,
            "condition set in ledger"
        );
        self.conditions.insert(0, instance);
        previous
    }

    /// Removes the instance stored under `(target, condition)`, if any.
    pub fn remove(
        &mut self,
        target: &ActorId,
        condition: ConditionKind,
    ) -> Option<ConditionInstance> {
        let index = self
            .conditions
            .iter()
            .position(|c| c.has_key(target, condition))?;
        tracing::debug!(token = %target, %condition, "removing condition from ledger");
        Some(self.conditions.remove(index))
    }

    pub fn get(&self, target: &ActorId, condition: ConditionKind) -> Option<&ConditionInstance> {
        self.conditions
            .iter()
            .find(|c| c.has_key(target, condition))
    }

    /// Instances whose countdown is governed by `actor`.
    pub fn find_by_actor(&self, actor: &ActorId) -> Vec<ConditionInstance> {
        self.conditions
            .iter()
            .filter(|c| &c.actor == actor)
            .cloned()
            .collect()
    }

    /// Instances borne by `target`.
    pub fn find_by_target(&self, target: &ActorId) -> Vec<ConditionInstance> {
        self.conditions
            .iter()
            .filter(|c| &c.target == target)
            .cloned()
            .collect()
    }

    pub fn clear_all(&mut self) {
        self.conditions.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionInstance> {
        self.conditions.iter()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}
