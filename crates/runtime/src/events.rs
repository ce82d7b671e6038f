//! Host events the tracker reacts to.

use tracker_core::TurnOrder;

use crate::commands::ChatMessage;
use crate::error::Result;
use crate::repository::decode_turn_order;
use crate::tracker::ConditionTracker;

/// Something that happened on the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// Host finished loading; the tracker may create its state.
    Ready,
    /// The initiative view was opened.
    InitiativeOpened,
    /// The turn order text changed from `previous` to `current`.
    TurnOrderChanged { previous: String, current: String },
    Chat(ChatMessage),
}

impl HostEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostEvent::Ready => "ready",
            HostEvent::InitiativeOpened => "initiative_opened",
            HostEvent::TurnOrderChanged { .. } => "turn_order_changed",
            HostEvent::Chat(_) => "chat",
        }
    }
}

impl ConditionTracker {
    /// Runs the handler for one host event to completion.
    pub fn handle(&self, event: &HostEvent) -> Result<()> {
        tracing::trace!(event = event.as_str(), "host event");
        match event {
            HostEvent::Ready => self.init(),
            HostEvent::InitiativeOpened => self.open_initiative().map(|_| ()),
            HostEvent::TurnOrderChanged { previous, current } => {
                let previous = snapshot(previous, "previous");
                let current = snapshot(current, "current");
                self.handle_turn_order_changed(&previous, &current)
                    .map(|_| ())
            }
            HostEvent::Chat(message) => {
                self.handle_chat(message);
                Ok(())
            }
        }
    }
}

/// Parses an event snapshot; unreadable text counts as empty.
fn snapshot(text: &str, which: &'static str) -> TurnOrder {
    decode_turn_order(text).unwrap_or_else(|error| {
        tracing::error!(
            %error,
            snapshot = which,
            "turn order snapshot unreadable, treating as empty"
        );
        TurnOrder::new()
    })
}
