use crate::config::TrackerConfig;
use crate::error::{Result, TrackerError};
use crate::state::{ActorId, Round, TurnEntry, TurnOrder};

/// Round number read back from a turn order, with a note on whether the
/// order had to be fixed up to produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReading {
    pub round: Round,
    /// The sentinel was inserted or duplicate sentinels were merged; the
    /// caller must write the order back.
    pub modified: bool,
}

/// Round counter projected from the sentinel row of a turn order.
///
/// The counter owns no state: it only inserts, repairs and reads the
/// sentinel. The round itself advances through the host's turn advance.
#[derive(Clone, Copy, Debug)]
pub struct RoundCounter<'a> {
    config: &'a TrackerConfig,
}

impl<'a> RoundCounter<'a> {
    pub fn new(config: &'a TrackerConfig) -> Self {
        Self { config }
    }

    /// Fresh sentinel row at round zero.
    pub fn sentinel(&self) -> TurnEntry {
        TurnEntry::new(ActorId::round_counter(), "0")
            .with_custom(self.config.round_counter_label.clone())
            .with_formula(self.config.round_counter_formula.clone())
    }

    /// Appends the sentinel when the order has none. Returns true if it did.
    pub fn ensure_exists(&self, order: &mut TurnOrder) -> bool {
        if order.iter().any(TurnEntry::is_round_counter) {
            return false;
        }
        tracing::info!("adding round counter");
        order.push(self.sentinel());
        true
    }

    /// Collapses duplicate sentinels into the first one, keeping the largest
    /// readable round. Returns true if the order changed.
    pub fn repair(&self, order: &mut TurnOrder) -> bool {
        let sentinels = order.iter().filter(|e| e.is_round_counter()).count();
        if sentinels <= 1 {
            return false;
        }

        let highest = order
            .iter()
            .filter(|e| e.is_round_counter())
            .filter_map(|e| parse_round(&e.priority).ok())
            .max();

        tracing::warn!(sentinels, ?highest, "merging duplicate round counters");

        let entries = order.entries_mut();
        let mut seen = false;
        entries.retain(|entry| {
            if !entry.is_round_counter() {
                return true;
            }
            !std::mem::replace(&mut seen, true)
        });

        if let Some(round) = highest
            && let Some(entry) = entries.iter_mut().find(|e| e.is_round_counter())
        {
            entry.priority = round.to_string();
        }
        true
    }

    /// Ensures a single sentinel exists and reads its round.
    pub fn current_round(&self, order: &mut TurnOrder) -> Result<RoundReading> {
        let inserted = self.ensure_exists(order);
        let repaired = self.repair(order);
        let round = Self::read(order).unwrap_or(Ok(Round::ZERO))?;
        Ok(RoundReading {
            round,
            modified: inserted || repaired,
        })
    }

    /// Reads the first sentinel's round without touching the order.
    /// Returns `None` when there is no sentinel.
    pub fn read(order: &TurnOrder) -> Option<Result<Round>> {
        order
            .iter()
            .find(|e| e.is_round_counter())
            .map(|e| parse_round(&e.priority))
    }

    /// Empties the order; used when the initiative view is (re)opened.
    pub fn clear(&self, order: &mut TurnOrder) {
        tracing::info!("clearing turn order");
        order.clear();
    }

    /// Clears stale entries and installs a fresh sentinel.
    pub fn reset(&self, order: &mut TurnOrder) {
        self.clear(order);
        self.ensure_exists(order);
    }
}

/// Parses a sentinel priority. Integral decimal text such as `"3.0"` is
/// accepted.
pub fn parse_round(text: &str) -> Result<Round> {
    let text = text.trim();
    if let Ok(value) = text.parse::<u32>() {
        return Ok(Round(value));
    }

    match text.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value.fract() == 0.0
                && value >= 0.0
                && value <= f64::from(u32::MAX) =>
        {
            Ok(Round(value as u32))
        }
        _ => Err(TrackerError::CorruptRoundCounter {
            reason: format!("priority {text:?} is not a round number"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinel_count(order: &TurnOrder) -> usize {
        order.iter().filter(|e| e.is_round_counter()).count()
    }

    #[test]
    fn ensure_exists_is_idempotent() {
        let config = TrackerConfig::default();
        let counter = RoundCounter::new(&config);
        let mut order = TurnOrder::from_entries(vec![TurnEntry::new("-1", "0")]);

        assert!(!counter.ensure_exists(&mut order));
        assert!(!counter.ensure_exists(&mut order));

        assert_eq!(order.len(), 1);
        assert_eq!(order.entries()[0].priority, "0");
    }

    #[test]
    fn missing_sentinel_is_appended_at_round_zero() {
        let config = TrackerConfig::default();
        let counter = RoundCounter::new(&config);
        let mut order = TurnOrder::from_entries(vec![TurnEntry::new("a", "17")]);

        let reading = counter.current_round(&mut order).unwrap();

        assert_eq!(reading.round, Round::ZERO);
        assert!(reading.modified);
        assert_eq!(order.len(), 2);
        let sentinel = &order.entries()[1];
        assert_eq!(sentinel.custom.as_deref(), Some("Round counter"));
        assert_eq!(sentinel.formula.as_deref(), Some("+1"));
    }

    #[test]
    fn current_round_reads_sentinel_priority() {
        let config = TrackerConfig::default();
        let counter = RoundCounter::new(&config);
        let mut order = TurnOrder::from_entries(vec![
            TurnEntry::new("a", "17"),
            TurnEntry::new("-1", "4"),
        ]);

        let reading = counter.current_round(&mut order).unwrap();
        assert_eq!(reading.round, Round(4));
        assert!(!reading.modified);
    }

    #[test]
    fn duplicate_sentinels_collapse_to_the_highest_round() {
        let config = TrackerConfig::default();
        let counter = RoundCounter::new(&config);
        let mut order = TurnOrder::from_entries(vec![
            TurnEntry::new("-1", "2"),
            TurnEntry::new("a", "17"),
            TurnEntry::new("-1", "5"),
        ]);

        let reading = counter.current_round(&mut order).unwrap();

        assert_eq!(reading.round, Round(5));
        assert!(reading.modified);
        assert_eq!(sentinel_count(&order), 1);
        assert!(order.entries()[0].is_round_counter());
    }

    #[test]
    fn malformed_priority_is_corrupt() {
        let config = TrackerConfig::default();
        let counter = RoundCounter::new(&config);
        let mut order = TurnOrder::from_entries(vec![TurnEntry::new("-1", "soon")]);

        let result = counter.current_round(&mut order);
        assert!(matches!(result, Err(TrackerError::CorruptRoundCounter { .. })));
    }

    #[test]
    fn integral_float_priorities_are_accepted() {
        assert_eq!(parse_round("3.0"), Ok(Round(3)));
        assert_eq!(parse_round(" 7 "), Ok(Round(7)));
        assert!(parse_round("2.5").is_err());
        assert!(parse_round("-1").is_err());
        assert!(parse_round("").is_err());
    }

    #[test]
    fn reset_leaves_only_a_fresh_sentinel() {
        let config = TrackerConfig::default();
        let counter = RoundCounter::new(&config);
        let mut order = TurnOrder::from_entries(vec![
            TurnEntry::new("a", "17"),
            TurnEntry::new("-1", "9"),
        ]);

        counter.reset(&mut order);

        assert_eq!(order.len(), 1);
        assert_eq!(RoundCounter::read(&order), Some(Ok(Round::ZERO)));
    }
}
