/// Tracker configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackerConfig {
    /// Label shown on the round counter row of the initiative list.
    pub round_counter_label: String,
    /// Formula the host applies to the round counter row each lap.
    pub round_counter_formula: String,
}

impl TrackerConfig {
    // ===== persisted format =====
    /// Version tag written into the condition ledger document.
    pub const LEDGER_VERSION: &'static str = "0.1";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUND_COUNTER_LABEL: &'static str = "Round counter";
    pub const DEFAULT_ROUND_COUNTER_FORMULA: &'static str = "+1";

    pub fn new() -> Self {
        Self {
            round_counter_label: Self::DEFAULT_ROUND_COUNTER_LABEL.to_owned(),
            round_counter_formula: Self::DEFAULT_ROUND_COUNTER_FORMULA.to_owned(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new()
    }
}
