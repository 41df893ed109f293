//! Player input tokens.
//!
//! Front-ends translate whatever the player typed or clicked into these
//! closed enums. Anything unrecognized is kept as `Unrecognized` rather than
//! rejected: a guess of that kind is never correct, and a decision of that
//! kind continues the round.

use serde::{Deserialize, Serialize};

/// Direction of a guess about the challenger card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Guess {
    /// Challenger is strictly greater than the reference card.
    Greater,
    /// Challenger is strictly less than the reference card.
    Less,
    Unrecognized,
}

impl Guess {
    /// Map free-form input ("greater", "g", "less", "l", ...) to a guess.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "greater" | "g" | "higher" | "h" => Guess::Greater,
            "less" | "l" | "lower" => Guess::Less,
            _ => Guess::Unrecognized,
        }
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Guess::Greater => "greater",
            Guess::Less => "less",
            Guess::Unrecognized => "unrecognized",
        })
    }
}

/// What to do with the stake after a correct guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Take the current stake and end the round.
    Bank,
    /// Double the stake and play another pair.
    Continue,
    /// Treated as `Continue`.
    Unrecognized,
}

impl Decision {
    /// Map free-form input ("stop", "bank", "continue", "y", ...) to a decision.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.trim().to_ascii_lowercase().as_str() {
            "stop" | "bank" | "s" | "b" => Decision::Bank,
            "continue" | "y" | "yes" | "c" => Decision::Continue,
            _ => Decision::Unrecognized,
        }
    }

    /// Does this decision keep the round going?
    #[must_use]
    pub fn continues(self) -> bool {
        !matches!(self, Decision::Bank)
    }
}
