//! Decks and their fixed compositions.
//!
//! `DeckKind` picks one of the two compositions (52 standard, 54 with
//! jokers). Building never shuffles; callers shuffle explicitly with an
//! injected `GameRng`.

pub mod deck;
pub mod kind;

pub use deck::{Deck, DeckError};
pub use kind::DeckKind;
