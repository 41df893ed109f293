//! Card ranks, including the two jokers.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::card::CardError;

/// One of the 15 ranks, in comparison order.
///
/// Ace is low. The jokers rank above the King and are never suited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    BlackJoker = 14,
    RedJoker = 15,
}

impl Rank {
    /// The 13 suited ranks, Ace through King.
    pub const SUITED: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// The two joker ranks.
    pub const JOKERS: [Rank; 2] = [Rank::BlackJoker, Rank::RedJoker];

    /// Comparison value, 1 (Ace) through 15 (Red Joker).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Is this one of the joker ranks?
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::BlackJoker | Rank::RedJoker)
    }

    /// Display name, as used in card text ("A", "10", "Black Joker").
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::BlackJoker => "Black Joker",
            Rank::RedJoker => "Red Joker",
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::SUITED
            .iter()
            .chain(Rank::JOKERS.iter())
            .copied()
            .find(|rank| rank.name() == s)
            .ok_or_else(|| CardError::InvalidValue(s.to_string()))
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_cover_one_to_fifteen() {
        let values: Vec<u8> = Rank::SUITED
            .iter()
            .chain(Rank::JOKERS.iter())
            .map(|r| r.value())
            .collect();
        assert_eq!(values, (1..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("A".parse::<Rank>(), Ok(Rank::Ace));
        assert_eq!("10".parse::<Rank>(), Ok(Rank::Ten));
        assert_eq!("Red Joker".parse::<Rank>(), Ok(Rank::RedJoker));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        // Ace is "A", never "1"
        assert_eq!("1".parse::<Rank>(), Err(CardError::InvalidValue("1".into())));
        assert!("T".parse::<Rank>().is_err());
    }

    #[test]
    fn test_joker_ranks() {
        assert!(Rank::BlackJoker.is_joker());
        assert!(Rank::RedJoker.is_joker());
        assert!(Rank::SUITED.iter().all(|r| !r.is_joker()));
    }
}
