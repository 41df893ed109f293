//! The wagering game: rounds, sessions, player input, and events.
//!
//! ## Key Types
//!
//! - `Round`: one stake, dealt pairs, bank-or-double until won, banked or lost
//! - `Session`: point balance, entry fees, and win/lose thresholds
//! - `Guess`, `Decision`: closed input tokens from the front-end
//! - `RoundEvent`, `SessionEvent`, `EventSink`: observable transitions

pub mod event;
pub mod guess;
pub mod round;
pub mod session;

pub use event::{EventSink, MemorySink, RoundEvent, SessionEvent, TracingSink};
pub use guess::{Decision, Guess};
pub use round::{Deal, DecisionOutcome, GuessRecord, Round, RoundError, RoundPhase};
pub use session::{Session, SessionError, SessionStatus};
