//! Host-facing gateways.
//!
//! The tracker never talks to a tabletop directly. Marker state, chat
//! delivery and token ownership are reached through these traits, injected as
//! `Arc<dyn ..>` when the tracker is built.

mod memory;
mod notice;

use tracker_content::MarkerTag;
use tracker_core::{ActorId, CharacterId, PlayerId};

pub use memory::{InMemoryMarkers, InMemoryRoster, RecordingNotifier};
pub use notice::{Audience, Notice, TargetConditions};

/// Character a token represents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Whether any player controls the character.
    pub controlled: bool,
}

impl Character {
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>, controlled: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            controlled,
        }
    }
}

/// Status markers shown on tokens.
pub trait MarkerGateway: Send + Sync {
    fn has_marker(&self, token: &ActorId, tag: &MarkerTag) -> bool;

    /// Adds `tag` unless the token already shows it.
    fn add_marker(&self, token: &ActorId, tag: &MarkerTag);

    /// Removes every occurrence of each tag.
    fn remove_markers(&self, token: &ActorId, tags: &[MarkerTag]);
}

/// Chat delivery. Undeliverable notices are dropped by the implementation.
pub trait Notifier: Send + Sync {
    fn notify(&self, audience: &Audience, notice: &Notice);
}

/// Token ownership and player roles.
pub trait Roster: Send + Sync {
    fn character_for(&self, token: &ActorId) -> Option<Character>;

    fn is_gm(&self, player: &PlayerId) -> bool;
}
