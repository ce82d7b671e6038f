//! Minimal tabletop host: turn order, token ownership, markers and selection.

use std::sync::Arc;

use tracker_core::{ActorId, PlayerId, TurnEntry, TurnOrder};
use tracker_runtime::{
    Character, ChatMessage, HostEvent, InMemoryMarkers, InMemoryRoster, RepositoryError,
    TurnOrderRepository, encode_turn_order,
};

type Result<T> = std::result::Result<T, RepositoryError>;

/// Host-side state the tracker reaches through its gateways.
pub struct Host {
    turn_order: Arc<dyn TurnOrderRepository>,
    markers: Arc<InMemoryMarkers>,
    roster: Arc<InMemoryRoster>,
    selected: Vec<ActorId>,
    player: PlayerId,
}

impl Host {
    pub fn new(
        turn_order: Arc<dyn TurnOrderRepository>,
        markers: Arc<InMemoryMarkers>,
        roster: Arc<InMemoryRoster>,
        player: PlayerId,
    ) -> Self {
        Self {
            turn_order,
            markers,
            roster,
            selected: Vec::new(),
            player,
        }
    }

    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    pub fn set_player(&mut self, player: PlayerId) {
        self.player = player;
    }

    pub fn selected(&self) -> &[ActorId] {
        &self.selected
    }

    pub fn select(&mut self, tokens: Vec<ActorId>) {
        self.selected = tokens;
    }

    pub fn markers(&self) -> &InMemoryMarkers {
        &self.markers
    }

    pub fn declare(&self, token: ActorId, character: &str, controlled: bool) {
        self.roster
            .set_token(token, Character::new(character, character, controlled));
    }

    pub fn order(&self) -> Result<TurnOrder> {
        self.turn_order.read()
    }

    pub fn join(&self, token: ActorId, priority: String) -> Result<HostEvent> {
        self.change(|order| order.push(TurnEntry::new(token, priority)))
    }

    /// `None` when the token was not in the order.
    pub fn leave(&self, token: &ActorId) -> Result<Option<HostEvent>> {
        if !self.order()?.contains(token) {
            return Ok(None);
        }
        self.change(|order| {
            order.remove(token);
        })
        .map(Some)
    }

    /// `None` when the order is empty.
    pub fn next(&self) -> Result<Option<HostEvent>> {
        if self.order()?.is_empty() {
            return Ok(None);
        }
        self.change(advance).map(Some)
    }

    pub fn chat(&self, line: String) -> HostEvent {
        HostEvent::Chat(ChatMessage {
            player: self.player.clone(),
            content: line,
            selected: self.selected.clone(),
        })
    }

    /// Applies an edit to the stored order and describes it as an event.
    fn change(&self, edit: impl FnOnce(&mut TurnOrder)) -> Result<HostEvent> {
        let previous = self.turn_order.load_text()?;
        let mut order = self.turn_order.read()?;
        edit(&mut order);
        let current = encode_turn_order(&order)?;
        self.turn_order.store_text(&current)?;
        Ok(HostEvent::TurnOrderChanged { previous, current })
    }
}

/// Host turn advance: the head moves to the back, applying its formula.
pub fn advance(order: &mut TurnOrder) {
    let entries = order.entries_mut();
    if entries.is_empty() {
        return;
    }
    let mut head = entries.remove(0);
    if let Some(formula) = &head.formula
        && let Some(priority) = apply_formula(&head.priority, formula)
    {
        head.priority = priority;
    }
    entries.push(head);
}

/// `"+1"` style formulas. Anything unreadable leaves the priority alone.
fn apply_formula(priority: &str, formula: &str) -> Option<String> {
    let step: f64 = formula.trim().trim_start_matches('+').parse().ok()?;
    let value: f64 = priority.trim().parse().ok()?;
    let next = value + step;
    Some(if next.fract() == 0.0 {
        format!("{}", next as i64)
    } else {
        next.to_string()
    })
}
