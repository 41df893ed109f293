//! # hilo-engine
//!
//! Round and wager engine for a single-player higher/lower card game.
//!
//! The player pays an entry fee to start a round. Each round deals a
//! reference card and a hidden challenger; the player guesses whether the
//! challenger is greater or less. A correct guess lets the player bank the
//! stake or double it and play another pair; a wrong guess loses it. The
//! balance carries across rounds until it reaches the win threshold or
//! drops below the lose threshold.
//!
//! ## Design Principles
//!
//! 1. **Observable transitions**: every round transition is recorded as a
//!    `RoundEvent`, including deck replenishment.
//!
//! 2. **Injected dependencies**: randomness comes from a seeded `GameRng`
//!    and session events go to a caller-chosen `EventSink`. Nothing reads
//!    global state, so a seed reproduces a session exactly.
//!
//! 3. **Closed inputs**: guesses and decisions are enums. Unrecognized input
//!    is a variant, not a string.
//!
//! ## Modules
//!
//! - `core`: RNG and configuration
//! - `cards`: ranks, suits, and the `Card` value
//! - `deck`: `Deck` and its two fixed compositions
//! - `game`: `Round`, `Session`, input tokens, and events

pub mod cards;
pub mod core;
pub mod deck;
pub mod game;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameRng, GameRngState, RoundConfig, SessionConfig};

pub use crate::cards::{Card, CardError, Rank, Suit};

pub use crate::deck::{Deck, DeckError, DeckKind};

pub use crate::game::{
    Deal, Decision, DecisionOutcome, EventSink, Guess, GuessRecord, MemorySink, Round, RoundError,
    RoundEvent, RoundPhase, Session, SessionError, SessionEvent, SessionStatus, TracingSink,
};
