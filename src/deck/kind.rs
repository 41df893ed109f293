//! Fixed deck compositions.

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::cards::{Card, Rank, Suit};

/// Which of the two fixed compositions to build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckKind {
    /// 52 suited cards.
    Standard,
    /// The standard 52 plus one Black Joker and one Red Joker.
    #[default]
    Jokers,
}

impl DeckKind {
    /// Number of cards in this composition.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            DeckKind::Standard => 52,
            DeckKind::Jokers => 54,
        }
    }

    /// The canonical card list, suit-major (Spade, Club, Diamond, Heart),
    /// Ace to King within a suit, jokers last.
    #[must_use]
    pub fn composition(self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(self.size());
        for suit in Suit::ALL {
            cards.extend(Rank::SUITED.iter().map(|&rank| Card::suited(rank, suit)));
        }
        if self == DeckKind::Jokers {
            cards.push(Card::black_joker());
            cards.push(Card::red_joker());
        }
        cards
    }

    /// Build an unshuffled deck of this composition.
    #[must_use]
    pub fn build(self) -> Deck {
        Deck::new(self.composition())
    }
}
