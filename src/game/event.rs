//! Observable events and the sinks that receive them.
//!
//! Every state transition in a `Round` is recorded as a `RoundEvent`, and
//! every balance change in a `Session` is reported to the session's
//! `EventSink`. The sink is chosen by whoever builds the session: the
//! console driver uses `TracingSink`, tests use `MemorySink`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::guess::Guess;
use super::session::SessionStatus;
use crate::cards::Card;

/// A single transition inside a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// The deck ran low and was replaced by a fresh shuffled one.
    DeckReplenished {
        /// Cards left in the old deck when it was discarded.
        discarded: usize,
    },

    /// A reference/challenger pair was dealt; only the reference is shown.
    Dealt { reference: Card },

    GuessEvaluated {
        guess: Guess,
        reference: Card,
        challenger: Card,
        correct: bool,
    },

    StakeDoubled { stake: u64 },

    /// Player banked after a correct guess.
    Banked { payout: u64 },

    /// Stake reached the round win threshold on a correct guess.
    AutoCashout { payout: u64 },

    /// Incorrect guess; the stake is gone.
    Forfeited { lost: u64 },
}

/// A balance-level transition inside a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    EntryFeePaid { fee: u64, balance: u64 },

    /// A round entry was refused; the session is no longer playable.
    EntryRefused { status: SessionStatus, balance: u64 },

    /// A finished round's events, forwarded in order.
    Round(RoundEvent),

    PayoutApplied { amount: u64, balance: u64 },

    /// The session reached a terminal status.
    Ended { status: SessionStatus, balance: u64 },
}

/// Receiver for session events.
pub trait EventSink {
    fn record(&mut self, event: &SessionEvent);
}

/// Forwards events to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::EntryFeePaid { fee, balance } => {
                info!(fee, balance, "entry fee paid");
            }
            SessionEvent::EntryRefused { status, balance } => {
                warn!(?status, balance, "round entry refused");
            }
            SessionEvent::Round(round_event) => {
                debug!(?round_event, "round event");
            }
            SessionEvent::PayoutApplied { amount, balance } => {
                info!(amount, balance, "payout applied");
            }
            SessionEvent::Ended { status, balance } => {
                info!(?status, balance, "session ended");
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Vec<SessionEvent>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Only the forwarded round events.
    pub fn round_events(&self) -> impl Iterator<Item = &RoundEvent> {
        self.events.iter().filter_map(|e| match e {
            SessionEvent::Round(r) => Some(r),
            _ => None,
        })
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}
