//! Turn order snapshot as exchanged with the host tabletop.

#[cfg(feature = "serde")]
use std::collections::BTreeMap;

use super::ActorId;

/// Host fields the tracker does not interpret, kept verbatim.
#[cfg(feature = "serde")]
pub type HostFields = BTreeMap<String, serde_json::Value>;

/// A single row of the host's initiative list.
///
/// The priority is kept as the host's text and unknown keys are carried in
/// `extra`, so rows survive a round-trip untouched; only the round counter
/// row is ever parsed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnEntry {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: ActorId,

    #[cfg_attr(
        feature = "serde",
        serde(rename = "pr", default, with = "priority_text")
    )]
    pub priority: String,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub custom: Option<String>,

    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub formula: Option<String>,

    #[cfg(feature = "serde")]
    #[serde(flatten)]
    pub extra: HostFields,
}

impl TurnEntry {
    pub fn new(id: impl Into<ActorId>, priority: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            priority: priority.into(),
            custom: None,
            formula: None,
            #[cfg(feature = "serde")]
            extra: HostFields::new(),
        }
    }

    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    pub fn is_round_counter(&self) -> bool {
        self.id.is_round_counter()
    }
}

/// Ordered initiative list. Index 0 is the entry whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TurnOrder {
    entries: Vec<TurnEntry>,
}

impl TurnOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<TurnEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<TurnEntry> {
        &mut self.entries
    }

    pub fn into_entries(self) -> Vec<TurnEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnEntry> {
        self.entries.iter()
    }

    /// Entry at index 0, if any.
    pub fn head(&self) -> Option<&TurnEntry> {
        self.entries.first()
    }

    /// Identifier of the entry whose turn it currently is.
    pub fn active_actor(&self) -> Option<&ActorId> {
        self.head().map(|entry| &entry.id)
    }

    pub fn contains(&self, id: &ActorId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    pub fn push(&mut self, entry: TurnEntry) {
        self.entries.push(entry);
    }

    /// Removes every entry with the given id. Returns true if any was removed.
    pub fn remove(&mut self, id: &ActorId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<TurnEntry> for TurnOrder {
    fn from_iter<T: IntoIterator<Item = TurnEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TurnOrder {
    type Item = &'a TurnEntry;
    type IntoIter = std::slice::Iter<'a, TurnEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Priorities arrive as JSON strings or numbers and are always written back
/// as strings.
#[cfg(feature = "serde")]
mod priority_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PriorityInput {
            Text(String),
            Integer(i64),
            Float(f64),
            Null(()),
        }

        Ok(match PriorityInput::deserialize(deserializer)? {
            PriorityInput::Text(raw) => raw,
            PriorityInput::Integer(value) => value.to_string(),
            PriorityInput::Float(value) => value.to_string(),
            PriorityInput::Null(()) => String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(ids: &[&str]) -> TurnOrder {
        ids.iter().map(|id| TurnEntry::new(*id, "0")).collect()
    }

    #[test]
    fn head_is_the_active_actor() {
        let order = order(&["a", "b", "-1"]);
        assert_eq!(order.active_actor(), Some(&ActorId::new("a")));
        assert!(TurnOrder::new().active_actor().is_none());
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut order = order(&["a", "b"]);
        assert!(order.remove(&ActorId::new("a")));
        assert!(!order.remove(&ActorId::new("a")));
        assert_eq!(order.len(), 1);
        assert!(order.contains(&ActorId::new("b")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn priority_accepts_numbers_and_writes_strings() {
        let parsed: TurnOrder = serde_json::from_str(
            r#"[{"id":"a","pr":12},{"id":"-1","pr":"3","custom":"Round counter","formula":"+1"}]"#,
        )
        .unwrap();
        assert_eq!(parsed.entries()[0].priority, "12");
        assert!(parsed.entries()[1].is_round_counter());

        let text = serde_json::to_string(&parsed).unwrap();
        assert!(text.contains(r#""pr":"12""#));
        assert!(!text.contains(r#""custom":null"#));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn malformed_entries_fall_back_to_defaults() {
        let parsed: TurnOrder = serde_json::from_str(r#"[{"pr":"5"}]"#).unwrap();
        assert_eq!(parsed.entries()[0].id, ActorId::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_host_fields_survive_a_round_trip() {
        let parsed: TurnOrder =
            serde_json::from_str(r#"[{"id":"tok1","pr":"12","_pageid":"page-7","flags":[1]}]"#)
                .unwrap();
        let entry = &parsed.entries()[0];
        assert_eq!(entry.priority, "12");
        assert_eq!(entry.extra["_pageid"], "page-7");

        let text = serde_json::to_string(&parsed).unwrap();
        assert!(text.contains(r#""_pageid":"page-7""#));
        assert!(text.contains(r#""flags":[1]"#));
        assert!(!text.contains("extra"));
    }
}
