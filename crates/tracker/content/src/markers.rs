//! Marker sets and tag resolution.
//!
//! A marker set names the status icon used for each condition kind. The host
//! knows icons by an opaque tag, looked up by name in its marker library.

use std::collections::BTreeMap;
use std::fmt;

use tracker_core::{ConditionKind, TrackerError};

/// Opaque marker tag as stored on a token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MarkerTag(String);

impl MarkerTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Condition kind -> marker name mapping for one marker pack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkerSet {
    pub name: String,
    pub markers: BTreeMap<ConditionKind, String>,
}

impl MarkerSet {
    pub const RPG_CONDITION_MARKERS: &'static str = "rpg-condition-markers";

    /// Built-in mapping for the "RPG condition markers" pack.
    pub fn rpg_condition_markers() -> Self {
        let markers = ConditionKind::all()
            .map(|kind| {
                let suffix = match kind {
                    ConditionKind::Bleed => "bleeding",
                    ConditionKind::EnergyDrained => "energy drained",
                    ConditionKind::FlatFooted => "flatfooted",
                    other => other.name(),
                };
                (kind, format!("path-condition-{suffix}"))
            })
            .collect();

        Self {
            name: Self::RPG_CONDITION_MARKERS.to_owned(),
            markers,
        }
    }

    pub fn marker_name(&self, kind: ConditionKind) -> Option<&str> {
        self.markers.get(&kind).map(String::as_str)
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::rpg_condition_markers()
    }
}

/// Entry of the host's marker library.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenMarker {
    pub name: String,
    pub tag: MarkerTag,
}

impl TokenMarker {
    pub fn new(name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: MarkerTag::new(tag),
        }
    }

    /// Library whose tags are the marker names themselves, for hosts without
    /// a separate tag namespace.
    pub fn library_for(set: &MarkerSet) -> Vec<TokenMarker> {
        set.markers
            .values()
            .map(|name| TokenMarker::new(name.clone(), name.clone()))
            .collect()
    }
}

/// Resolves condition kinds to the tags the host understands.
#[derive(Clone, Debug, Default)]
pub struct MarkerCatalog {
    set: MarkerSet,
    library: Vec<TokenMarker>,
}

impl MarkerCatalog {
    pub fn new(set: MarkerSet, library: Vec<TokenMarker>) -> Self {
        Self { set, library }
    }

    /// Catalog whose tags equal the set's marker names.
    pub fn standalone(set: MarkerSet) -> Self {
        let library = TokenMarker::library_for(&set);
        Self { set, library }
    }

    pub fn set(&self) -> &MarkerSet {
        &self.set
    }

    /// Tag for `kind`, or [`TrackerError::MissingMarkerMapping`] when the set
    /// has no marker for it or the library does not know that marker.
    pub fn tag_for(&self, kind: ConditionKind) -> Result<&MarkerTag, TrackerError> {
        let missing = || TrackerError::MissingMarkerMapping { condition: kind };

        let Some(name) = self.set.marker_name(kind) else {
            tracing::warn!(condition = %kind, set = %self.set.name, "no marker name for condition");
            return Err(missing());
        };

        self.library
            .iter()
            .find(|marker| marker.name == name)
            .map(|marker| &marker.tag)
            .ok_or_else(|| {
                tracing::warn!(condition = %kind, marker = name, "marker not found in library");
                missing()
            })
    }

    /// Every tag this catalog can resolve.
    pub fn tags(&self) -> impl Iterator<Item = (ConditionKind, &MarkerTag)> {
        ConditionKind::all().filter_map(|kind| self.tag_for(kind).ok().map(|tag| (kind, tag)))
    }
}
