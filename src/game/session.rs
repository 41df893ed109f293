//! Session: the point balance across rounds.
//!
//! A session pays an entry fee for each round, adds the round's payout back,
//! and ends when the balance reaches the win threshold or drops below the
//! lose threshold.
//!
//! ```
//! use hilo_engine::core::{GameRng, SessionConfig};
//! use hilo_engine::game::{Session, SessionStatus};
//!
//! let mut session = Session::new(SessionConfig::default(), GameRng::new(3));
//! let round = session.start_round().unwrap();
//! assert_eq!(session.balance(), 35);
//! assert_eq!(round.current_stake(), 20);
//! assert_eq!(session.status(), SessionStatus::Playable);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::event::{EventSink, SessionEvent, TracingSink};
use super::round::{Round, RoundPhase};
use crate::core::config::SessionConfig;
use crate::core::rng::{GameRng, GameRngState};

/// Whether a session can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    Playable,
    /// Balance reached the win threshold.
    Won,
    /// Balance fell below the lose threshold.
    Depleted,
    /// Balance meets the lose threshold but cannot cover the entry fee.
    Stalled,
}

impl SessionStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self != SessionStatus::Playable
    }
}

/// Session operation failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("session is {0:?}; no further rounds can be entered")]
    Closed(SessionStatus),

    #[error("round is still in progress ({0:?})")]
    RoundInProgress(RoundPhase),
}

/// A player's session.
#[derive(Clone, Debug)]
pub struct Session<S: EventSink = TracingSink> {
    config: SessionConfig,
    balance: u64,
    rng: GameRng,
    sink: S,
    rounds_played: u32,
}

impl Session<TracingSink> {
    /// Create a session that logs through `tracing`.
    pub fn new(config: SessionConfig, rng: GameRng) -> Self {
        Self::with_sink(config, rng, TracingSink)
    }
}

impl<S: EventSink> Session<S> {
    /// Create a session reporting to `sink`.
    pub fn with_sink(config: SessionConfig, rng: GameRng, sink: S) -> Self {
        debug!(
            balance = config.starting_balance,
            entry_fee = config.entry_fee,
            win_threshold = config.win_threshold,
            lose_threshold = config.lose_threshold,
            seed = rng.seed(),
            "session created"
        );
        Self {
            balance: config.starting_balance,
            config,
            rng,
            sink,
            rounds_played: 0,
        }
    }

    /// Balance meets the lose threshold.
    #[must_use]
    pub fn can_enter_round(&self) -> bool {
        self.balance >= self.config.lose_threshold
    }

    /// Deduct the entry fee if the balance covers it.
    ///
    /// Returns whether the fee was paid; the balance is unchanged otherwise.
    pub fn pay_entry_fee(&mut self) -> bool {
        let fee = self.config.entry_fee;
        match self.balance.checked_sub(fee) {
            Some(balance) => {
                self.balance = balance;
                self.sink.record(&SessionEvent::EntryFeePaid { fee, balance });
                true
            }
            None => false,
        }
    }

    /// Add a round payout to the balance.
    pub fn apply_payout(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        self.sink.record(&SessionEvent::PayoutApplied {
            amount,
            balance: self.balance,
        });
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.balance >= self.config.win_threshold
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.has_won() {
            SessionStatus::Won
        } else if !self.can_enter_round() {
            SessionStatus::Depleted
        } else if self.balance < self.config.entry_fee {
            SessionStatus::Stalled
        } else {
            SessionStatus::Playable
        }
    }

    /// Pay the entry fee and start a round.
    ///
    /// Refused unless the session is `Playable`; a refused entry never
    /// touches the balance.
    pub fn start_round(&mut self) -> Result<Round, SessionError> {
        let status = self.status();
        if status.is_terminal() || !self.pay_entry_fee() {
            self.sink.record(&SessionEvent::EntryRefused {
                status,
                balance: self.balance,
            });
            return Err(SessionError::Closed(status));
        }

        info!(round = self.rounds_played + 1, balance = self.balance, "round started");
        Ok(Round::new(self.config.round.clone(), self.rng.fork()))
    }

    /// Settle a finished round: forward its events and apply its payout.
    pub fn finish_round(&mut self, round: Round) -> Result<SessionStatus, SessionError> {
        let payout = round
            .payout()
            .ok_or(SessionError::RoundInProgress(round.phase()))?;

        for event in round.events() {
            self.sink.record(&SessionEvent::Round(event.clone()));
        }
        self.apply_payout(payout);
        self.rounds_played += 1;

        let status = self.status();
        info!(round = self.rounds_played, payout, balance = self.balance, ?status, "round settled");
        if status.is_terminal() {
            self.sink.record(&SessionEvent::Ended {
                status,
                balance: self.balance,
            });
        }
        Ok(status)
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current RNG position, enough to reproduce the rest of the session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}
