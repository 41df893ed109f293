//! Round and session configuration.
//!
//! Defaults reproduce the classic table: 60 starting points, 25 to enter a
//! round, win at 1000, out below 30, stakes starting at 20 and auto-cashed
//! once they reach 1000.
//!
//! Constructors never reject a configuration. `validate()` is available for
//! front-ends that want the sensible-convention checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deck::DeckKind;

/// Configuration problems reported by `validate()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },

    #[error("lose threshold ({lose}) must be below win threshold ({win})")]
    LoseAboveWin { lose: u64, win: u64 },

    #[error("entry fee ({fee}) must be below win threshold ({win})")]
    FeeAboveWin { fee: u64, win: u64 },

    #[error("starting balance ({start}) must be below win threshold ({win})")]
    StartAboveWin { start: u64, win: u64 },
}

/// Configuration for a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Stake escrowed when the round starts.
    pub initial_stake: u64,

    /// Stake at which a correct guess cashes out automatically.
    pub win_threshold: u64,

    /// Composition of the round's deck (and of any replenishment).
    pub deck: DeckKind,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            initial_stake: 20,
            win_threshold: 1000,
            deck: DeckKind::Jokers,
        }
    }
}

impl RoundConfig {
    /// Create a round configuration.
    pub fn new(initial_stake: u64, win_threshold: u64) -> Self {
        Self {
            initial_stake,
            win_threshold,
            ..Self::default()
        }
    }

    /// Set the deck composition.
    #[must_use]
    pub fn with_deck(mut self, deck: DeckKind) -> Self {
        self.deck = deck;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_stake == 0 {
            return Err(ConfigError::NotPositive { field: "initial_stake" });
        }
        if self.win_threshold == 0 {
            return Err(ConfigError::NotPositive { field: "round win_threshold" });
        }
        Ok(())
    }
}

/// Configuration for a whole session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Balance at session start.
    pub starting_balance: u64,

    /// Points deducted to enter a round.
    pub entry_fee: u64,

    /// Balance at which the session is won.
    pub win_threshold: u64,

    /// Minimum balance required to enter a round.
    pub lose_threshold: u64,

    /// Settings for every round entered.
    pub round: RoundConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            starting_balance: 60,
            entry_fee: 25,
            win_threshold: 1000,
            lose_threshold: 30,
            round: RoundConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create a session configuration from the four balance rules.
    pub fn new(starting_balance: u64, entry_fee: u64, win_threshold: u64, lose_threshold: u64) -> Self {
        Self {
            starting_balance,
            entry_fee,
            win_threshold,
            lose_threshold,
            round: RoundConfig::default(),
        }
    }

    /// Set the per-round configuration.
    #[must_use]
    pub fn with_round(mut self, round: RoundConfig) -> Self {
        self.round = round;
        self
    }

    /// Check the conventions the engine assumes but does not enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("starting_balance", self.starting_balance),
            ("entry_fee", self.entry_fee),
            ("win_threshold", self.win_threshold),
            ("lose_threshold", self.lose_threshold),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigError::NotPositive { field: *field });
        }
        if self.lose_threshold >= self.win_threshold {
            return Err(ConfigError::LoseAboveWin {
                lose: self.lose_threshold,
                win: self.win_threshold,
            });
        }
        if self.entry_fee >= self.win_threshold {
            return Err(ConfigError::FeeAboveWin {
                fee: self.entry_fee,
                win: self.win_threshold,
            });
        }
        if self.starting_balance >= self.win_threshold {
            return Err(ConfigError::StartAboveWin {
                start: self.starting_balance,
                win: self.win_threshold,
            });
        }
        self.round.validate()
    }
}
