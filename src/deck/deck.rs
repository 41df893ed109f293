//! Ordered deck of cards.
//!
//! The front of the deck is the next card to be dealt. Order changes only
//! through `shuffle`; composition changes only through `draw`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::rng::GameRng;

/// Deck operation failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    #[error("Cannot draw card from an empty deck")]
    EmptyDeck,
}

/// An ordered sequence of cards.
///
/// ## Usage
///
/// ```
/// use hilo_engine::core::GameRng;
/// use hilo_engine::deck::{DeckError, DeckKind};
///
/// let mut rng = GameRng::new(7);
/// let mut deck = DeckKind::Standard.build();
/// deck.shuffle(&mut rng);
///
/// let top = deck.draw().unwrap();
/// assert_eq!(deck.len(), 51);
/// assert!(!deck.contains(&top));
///
/// while deck.draw().is_ok() {}
/// assert_eq!(deck.draw(), Err(DeckError::EmptyDeck));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create a deck holding its own copy of `cards`, front first.
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Reorder the deck uniformly at random.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(self.cards.make_contiguous());
    }

    /// Remove and return the front card.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop_front().ok_or(DeckError::EmptyDeck)
    }

    /// Return a uniformly chosen card without removing it.
    pub fn draw_with_replacement(&self, rng: &mut GameRng) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        let index = rng.gen_range_usize(0..self.cards.len());
        Ok(self.cards[index])
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Membership by value equality.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck with {} cards remaining.", self.len())
    }
}
