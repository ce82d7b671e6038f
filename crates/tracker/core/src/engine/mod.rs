//! Turn-order-driven duration state machine.
//!
//! [`RoundCounter`] projects the round number out of the turn order,
//! [`TurnTransition`] decides whether a change to the order means a turn
//! actually passed, and [`CountdownEngine`] applies the resulting countdown
//! steps to the [`ConditionLedger`](crate::ConditionLedger).

mod countdown;
mod round_counter;
mod transition;

pub use countdown::{CountdownEngine, CountdownOutcome, CountdownReport};
pub use round_counter::{RoundCounter, RoundReading, parse_round};
pub use transition::{NonAdvance, TurnTransition};
