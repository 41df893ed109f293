//! Immutable playing card value.
//!
//! A `Card` is a rank plus an optional suit. Jokers never carry a suit and
//! every other rank always does; both constructors enforce this, and the
//! fields are private so a constructed card cannot be altered:
//!
//! ```compile_fail
//! use hilo_engine::cards::{Card, Rank, Suit};
//!
//! let mut card = Card::new(Rank::Queen, Some(Suit::Club)).unwrap();
//! card.rank = Rank::King;
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use super::rank::Rank;
use super::suit::Suit;

/// Card construction failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("Invalid card value: '{0}'")]
    InvalidValue(String),

    #[error("Invalid suit: '{suit}' for value '{value}'")]
    InvalidSuit { suit: String, value: String },

    #[error("Jokers cannot have a suit.")]
    JokerHasSuit,

    #[error("Card value '{0}' requires a suit")]
    MissingSuit(Rank),
}

/// A single playing card.
///
/// Ordering is total: rank value first, then suit (Spade < Club < Diamond
/// < Heart). Joker ranks are unique, so two jokers never tie on rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
}

/// Unvalidated wire form; deserialization goes through `Card::new`.
#[derive(Deserialize)]
struct RawCard {
    rank: Rank,
    suit: Option<Suit>,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.rank, raw.suit)
    }
}

impl Card {
    /// Create a card, validating the joker/suit invariant.
    pub fn new(rank: Rank, suit: Option<Suit>) -> Result<Self, CardError> {
        match (rank.is_joker(), suit) {
            (true, Some(_)) => Err(CardError::JokerHasSuit),
            (false, None) => Err(CardError::MissingSuit(rank)),
            _ => Ok(Self { rank, suit }),
        }
    }

    /// Parse a card from its textual value and suit names.
    ///
    /// ```
    /// use hilo_engine::cards::{Card, CardError};
    ///
    /// let card = Card::parse("10", Some("Diamond")).unwrap();
    /// assert_eq!(card.to_string(), "10 of Diamond");
    ///
    /// assert_eq!(Card::parse("Black Joker", Some("Heart")), Err(CardError::JokerHasSuit));
    /// ```
    pub fn parse(value: &str, suit: Option<&str>) -> Result<Self, CardError> {
        let rank: Rank = value.parse()?;
        let suit = match suit {
            Some(name) if rank.is_joker() => {
                tracing::debug!(value, suit = name, "rejected suited joker");
                return Err(CardError::JokerHasSuit);
            }
            Some(name) => Some(Suit::from_name(name).ok_or_else(|| CardError::InvalidSuit {
                suit: name.to_string(),
                value: value.to_string(),
            })?),
            None => None,
        };
        Self::new(rank, suit)
    }

    /// Suited card for a rank already known to be non-joker.
    pub(crate) const fn suited(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit: Some(suit) }
    }

    #[must_use]
    pub const fn black_joker() -> Self {
        Self { rank: Rank::BlackJoker, suit: None }
    }

    #[must_use]
    pub const fn red_joker() -> Self {
        Self { rank: Rank::RedJoker, suit: None }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }

    /// `(rank value, suit value)` with 0 standing in for "no suit".
    #[must_use]
    pub fn sort_key(&self) -> (u8, u8) {
        (self.rank.value(), self.suit.map_or(0, Suit::value))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} of {}", self.rank, suit),
            None => write!(f, "{}", self.rank),
        }
    }
}
