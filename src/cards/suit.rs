//! Card suits.

use serde::{Deserialize, Serialize};

/// One of the four suits, in tie-break order: Spade < Club < Diamond < Heart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade = 1,
    Club = 2,
    Diamond = 3,
    Heart = 4,
}

impl Suit {
    /// All suits in tie-break order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Diamond, Suit::Heart];

    /// Tie-break value, 1 (Spade) through 4 (Heart).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Club => "Club",
            Suit::Diamond => "Diamond",
            Suit::Heart => "Heart",
        }
    }

    /// Look up a suit by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Suit> {
        Suit::ALL.iter().copied().find(|s| s.name() == name)
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiebreak_order() {
        assert!(Suit::Spade < Suit::Club);
        assert!(Suit::Club < Suit::Diamond);
        assert!(Suit::Diamond < Suit::Heart);
        assert_eq!(Suit::Heart.value(), 4);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Suit::from_name("Club"), Some(Suit::Club));
        assert_eq!(Suit::from_name("Stars"), None);
        assert_eq!(Suit::from_name("club"), None);
    }
}
