#![allow(dead_code)]

use std::sync::Arc;

use tracker_core::{ActorId, TurnEntry, TurnOrder};
use tracker_runtime::{
    Audience, Character, ChatMessage, ConditionTracker, HostEvent, InMemoryMarkers, InMemoryRoster,
    InMemoryTurnOrderRepo, Notice, RecordingNotifier, TrackerBuilder, TurnOrderRepository,
    encode_turn_order,
};

pub const GM: &str = "gm-player";
pub const PLAYER: &str = "alice";

/// Host stand-in: owns the turn order text and records what the tracker did.
pub struct Table {
    pub tracker: ConditionTracker,
    pub turn_order: Arc<InMemoryTurnOrderRepo>,
    pub markers: Arc<InMemoryMarkers>,
    pub notifier: Arc<RecordingNotifier>,
    pub roster: Arc<InMemoryRoster>,
}

impl Table {
    pub fn new() -> Self {
        Self::with(|builder| builder)
    }

    pub fn with(configure: impl FnOnce(TrackerBuilder) -> TrackerBuilder) -> Self {
        let turn_order = Arc::new(InMemoryTurnOrderRepo::new());
        let markers = Arc::new(InMemoryMarkers::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let roster = Arc::new(InMemoryRoster::new());

        roster.add_gm(GM);
        roster.set_token("valeros", Character::new("char-valeros", "Valeros", true));
        roster.set_token("goblin", Character::new("char-goblin", "Goblin", false));
        roster.set_token("ezren", Character::new("char-ezren", "Ezren", true));

        let builder = ConditionTracker::builder()
            .turn_order(turn_order.clone())
            .markers(markers.clone())
            .notifier(notifier.clone())
            .roster(roster.clone());
        let tracker = configure(builder).build().unwrap();
        tracker.handle(&HostEvent::Ready).unwrap();

        Self {
            tracker,
            turn_order,
            markers,
            notifier,
            roster,
        }
    }

    pub fn order(&self) -> TurnOrder {
        self.turn_order.read().unwrap()
    }

    /// Replaces the order the way a host edit would, delivering the change.
    pub fn set_order(&self, entries: &[(&str, &str)]) {
        let order = entries
            .iter()
            .map(|(id, pr)| TurnEntry::new(*id, *pr))
            .collect();
        self.change_to(order);
    }

    pub fn open(&self) {
        self.tracker.handle(&HostEvent::InitiativeOpened).unwrap();
    }

    /// Host "next turn": head to the back, +1 when the head is the counter.
    pub fn next(&self) {
        let mut entries = self.order().into_entries();
        if entries.is_empty() {
            return;
        }
        let mut head = entries.remove(0);
        if head.is_round_counter() {
            let round: u32 = head.priority.parse().unwrap();
            head.priority = (round + 1).to_string();
        }
        entries.push(head);
        self.change_to(TurnOrder::from_entries(entries));
    }

    pub fn change_to(&self, order: TurnOrder) {
        let previous = self.turn_order.load_text().unwrap();
        let current = encode_turn_order(&order).unwrap();
        self.turn_order.store_text(&current).unwrap();
        self.tracker
            .handle(&HostEvent::TurnOrderChanged { previous, current })
            .unwrap();
    }

    pub fn say(&self, player: &str, line: &str, selected: &[&str]) {
        let message = ChatMessage::new(player, line)
            .with_selected(selected.iter().map(|id| ActorId::new(*id)));
        self.tracker.handle(&HostEvent::Chat(message)).unwrap();
    }

    pub fn gm(&self, line: &str, selected: &[&str]) {
        self.say(GM, line, selected);
    }

    pub fn marker_names(&self, token: &str) -> Vec<String> {
        self.markers
            .markers_on(&ActorId::new(token))
            .iter()
            .map(|tag| tag.as_str().to_owned())
            .collect()
    }

    /// Rendered notices sent since the last call.
    pub fn lines(&self) -> Vec<(Audience, String)> {
        self.notifier
            .take()
            .into_iter()
            .map(|(audience, notice)| (audience, notice.to_string()))
            .collect()
    }

    pub fn notices(&self) -> Vec<(Audience, Notice)> {
        self.notifier.take()
    }
}

pub fn whisper(player: &str, line: &str) -> (Audience, String) {
    (Audience::Player(player.into()), line.to_owned())
}

pub fn to_gm(line: &str) -> (Audience, String) {
    (Audience::Gm, line.to_owned())
}
