//! Playing cards: ranks, suits, and the immutable `Card` value.
//!
//! ## Key Types
//!
//! - `Rank`: 15 ordered ranks, Ace (1) through Red Joker (15)
//! - `Suit`: tie-break order Spade < Club < Diamond < Heart
//! - `Card`: rank plus optional suit, totally ordered
//! - `CardError`: construction and parse failures

pub mod card;
pub mod rank;
pub mod suit;

pub use card::{Card, CardError};
pub use rank::Rank;
pub use suit::Suit;
