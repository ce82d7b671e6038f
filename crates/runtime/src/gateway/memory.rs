//! In-memory gateways for tests and the host simulation.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use tracker_content::MarkerTag;
use tracker_core::{ActorId, PlayerId};

use super::{Audience, Character, MarkerGateway, Notice, Notifier, Roster};

/// Marker state per token.
#[derive(Debug, Default)]
pub struct InMemoryMarkers {
    markers: RwLock<HashMap<ActorId, Vec<MarkerTag>>>,
}

impl InMemoryMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags currently shown on `token`, in the order they were added.
    pub fn markers_on(&self, token: &ActorId) -> Vec<MarkerTag> {
        self.markers
            .read()
            .map(|markers| markers.get(token).cloned().unwrap_or_default())
            .unwrap_or_default()
    }
}

impl MarkerGateway for InMemoryMarkers {
    fn has_marker(&self, token: &ActorId, tag: &MarkerTag) -> bool {
        self.markers
            .read()
            .map(|markers| markers.get(token).is_some_and(|tags| tags.contains(tag)))
            .unwrap_or(false)
    }

    fn add_marker(&self, token: &ActorId, tag: &MarkerTag) {
        let Ok(mut markers) = self.markers.write() else {
            tracing::error!(token = %token, "marker lock poisoned");
            return;
        };
        let tags = markers.entry(token.clone()).or_default();
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }

    fn remove_markers(&self, token: &ActorId, tags: &[MarkerTag]) {
        let Ok(mut markers) = self.markers.write() else {
            tracing::error!(token = %token, "marker lock poisoned");
            return;
        };
        if let Some(shown) = markers.get_mut(token) {
            shown.retain(|tag| !tags.contains(tag));
        }
    }
}

/// Keeps every notice in delivery order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: RwLock<Vec<(Audience, Notice)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(Audience, Notice)> {
        self.sent
            .read()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// Drains the recorded notices.
    pub fn take(&self) -> Vec<(Audience, Notice)> {
        self.sent
            .write()
            .map(|mut sent| std::mem::take(&mut *sent))
            .unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, audience: &Audience, notice: &Notice) {
        match self.sent.write() {
            Ok(mut sent) => sent.push((audience.clone(), notice.clone())),
            Err(_) => tracing::error!(%audience, "notice dropped, lock poisoned"),
        }
    }
}

/// Token to character mapping plus the set of GM players.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    characters: RwLock<HashMap<ActorId, Character>>,
    gms: RwLock<HashSet<PlayerId>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<ActorId>, character: Character) {
        if let Ok(mut characters) = self.characters.write() {
            characters.insert(token.into(), character);
        }
    }

    pub fn add_gm(&self, player: impl Into<PlayerId>) {
        if let Ok(mut gms) = self.gms.write() {
            gms.insert(player.into());
        }
    }
}

impl Roster for InMemoryRoster {
    fn character_for(&self, token: &ActorId) -> Option<Character> {
        self.characters
            .read()
            .ok()
            .and_then(|characters| characters.get(token).cloned())
    }

    fn is_gm(&self, player: &PlayerId) -> bool {
        self.gms
            .read()
            .map(|gms| gms.contains(player))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_are_not_duplicated() {
        let markers = InMemoryMarkers::new();
        let token = ActorId::new("tok");
        let tag = MarkerTag::new("path-condition-prone");

        markers.add_marker(&token, &tag);
        markers.add_marker(&token, &tag);
        assert_eq!(markers.markers_on(&token), vec![tag.clone()]);

        markers.remove_markers(&token, std::slice::from_ref(&tag));
        assert!(!markers.has_marker(&token, &tag));
    }
}
