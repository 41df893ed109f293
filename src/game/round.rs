//! One wagering round.
//!
//! ## Phases
//!
//! ```text
//! Ready ──deal_cards──▶ AwaitingGuess ──evaluate_guess──┬─ correct, stake < threshold ─▶ AwaitingDecision
//!   ▲                                                   ├─ correct, stake ≥ threshold ─▶ Won
//!   │                                                   └─ incorrect ──────────────────▶ Lost
//!   └──────────────double────────────── AwaitingDecision ──bank──▶ Banked
//! ```
//!
//! `decide(Decision::Continue)` is `double` followed by `deal_cards`.
//! `Won`, `Banked` and `Lost` are terminal; `payout()` is only `Some` there.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info};

use super::event::RoundEvent;
use super::guess::{Decision, Guess};
use crate::cards::Card;
use crate::core::config::RoundConfig;
use crate::core::rng::GameRng;
use crate::deck::{Deck, DeckError};

/// Where a round is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No pair on the table: fresh round, or stake just doubled.
    Ready,
    /// Pair dealt, challenger hidden.
    AwaitingGuess,
    /// Correct guess; player may bank or continue.
    AwaitingDecision,
    Won,
    Banked,
    Lost,
}

impl RoundPhase {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Banked | RoundPhase::Lost)
    }
}

/// Round operation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("cannot {operation} while round is {phase:?}")]
    InvalidPhase {
        operation: &'static str,
        phase: RoundPhase,
    },

    #[error("no cards have been dealt yet")]
    NoCardsDealt,

    #[error("stake {stake} cannot be doubled without overflow")]
    StakeOverflow { stake: u64 },

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Result of dealing a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deal {
    /// The card shown to the player.
    pub reference: Card,
    /// Whether the deck had to be replaced before dealing.
    pub replenished: bool,
}

/// Result of a bank/continue decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOutcome {
    Banked { payout: u64 },
    Continued(Deal),
}

/// One evaluated guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Guess,
    pub reference: Card,
    pub challenger: Card,
    pub correct: bool,
    /// Stake at the moment of the guess.
    pub stake: u64,
}

/// A single round: deck, stake, and the current pair.
#[derive(Clone, Debug)]
pub struct Round {
    config: RoundConfig,
    rng: GameRng,
    deck: Deck,
    stake: u64,
    phase: RoundPhase,
    reference: Option<Card>,
    challenger: Option<Card>,
    /// Most rounds end within a handful of guesses.
    history: SmallVec<[GuessRecord; 8]>,
    events: Vec<RoundEvent>,
}

impl Round {
    /// Start a round with a freshly shuffled deck of the configured kind.
    pub fn new(config: RoundConfig, mut rng: GameRng) -> Self {
        let mut deck = config.deck.build();
        deck.shuffle(&mut rng);
        Self::with_deck(config, deck, rng)
    }

    /// Start a round dealing from `deck` in its current order.
    ///
    /// Replenishment still builds fresh shuffled decks from `config.deck`.
    pub fn with_deck(config: RoundConfig, deck: Deck, rng: GameRng) -> Self {
        debug!(
            stake = config.initial_stake,
            win_threshold = config.win_threshold,
            cards = deck.len(),
            "round created"
        );
        Self {
            stake: config.initial_stake,
            config,
            rng,
            deck,
            phase: RoundPhase::Ready,
            reference: None,
            challenger: None,
            history: SmallVec::new(),
            events: Vec::new(),
        }
    }

    /// Deal a reference card and a hidden challenger.
    ///
    /// A deck with fewer than two cards is replaced by a fresh shuffled one
    /// first; that is reported in the returned `Deal` and as a
    /// `RoundEvent::DeckReplenished`.
    pub fn deal_cards(&mut self) -> Result<Deal, RoundError> {
        self.expect_phase("deal cards", RoundPhase::Ready)?;

        let mut replenished = false;
        if self.deck.len() < 2 {
            let discarded = self.deck.len();
            let mut fresh = self.config.deck.build();
            fresh.shuffle(&mut self.rng);
            self.deck = fresh;
            replenished = true;
            debug!(discarded, "deck replenished");
            self.events.push(RoundEvent::DeckReplenished { discarded });
        }

        let reference = self.deck.draw()?;
        let challenger = self.deck.draw()?;
        self.reference = Some(reference);
        self.challenger = Some(challenger);
        self.phase = RoundPhase::AwaitingGuess;

        debug!(%reference, remaining = self.deck.len(), "pair dealt");
        self.events.push(RoundEvent::Dealt { reference });

        Ok(Deal { reference, replenished })
    }

    /// The challenger card of the current pair.
    pub fn reveal_challenger(&self) -> Result<Card, RoundError> {
        self.challenger.ok_or(RoundError::NoCardsDealt)
    }

    /// Judge `guess` against the current pair and advance the round.
    ///
    /// Only strict inequality counts: an identical pair is wrong in both
    /// directions, and `Guess::Unrecognized` is always wrong. A wrong guess
    /// forfeits the stake and ends the round.
    pub fn evaluate_guess(&mut self, guess: Guess) -> Result<bool, RoundError> {
        self.expect_phase("evaluate a guess", RoundPhase::AwaitingGuess)?;
        let (reference, challenger) = match (self.reference, self.challenger) {
            (Some(r), Some(c)) => (r, c),
            _ => return Err(RoundError::NoCardsDealt),
        };

        let correct = match guess {
            Guess::Greater => challenger > reference,
            Guess::Less => challenger < reference,
            Guess::Unrecognized => false,
        };

        debug!(%guess, %reference, %challenger, correct, stake = self.stake, "guess evaluated");
        self.history.push(GuessRecord {
            guess,
            reference,
            challenger,
            correct,
            stake: self.stake,
        });
        self.events.push(RoundEvent::GuessEvaluated {
            guess,
            reference,
            challenger,
            correct,
        });

        if !correct {
            self.forfeit();
        } else if self.stake >= self.config.win_threshold {
            self.phase = RoundPhase::Won;
            info!(payout = self.stake, "stake reached round threshold");
            self.events.push(RoundEvent::AutoCashout { payout: self.stake });
        } else {
            self.phase = RoundPhase::AwaitingDecision;
        }

        Ok(correct)
    }

    /// Double the stake after a correct guess. The next pair is not dealt.
    pub fn double(&mut self) -> Result<(), RoundError> {
        self.expect_phase("double the stake", RoundPhase::AwaitingDecision)?;
        self.stake = self
            .stake
            .checked_mul(2)
            .ok_or(RoundError::StakeOverflow { stake: self.stake })?;
        self.phase = RoundPhase::Ready;

        debug!(stake = self.stake, "stake doubled");
        self.events.push(RoundEvent::StakeDoubled { stake: self.stake });
        Ok(())
    }

    /// Take the current stake and end the round.
    pub fn bank(&mut self) -> Result<u64, RoundError> {
        self.expect_phase("bank", RoundPhase::AwaitingDecision)?;
        self.phase = RoundPhase::Banked;

        info!(payout = self.stake, "stake banked");
        self.events.push(RoundEvent::Banked { payout: self.stake });
        Ok(self.stake)
    }

    /// Apply a bank/continue decision. Anything but `Bank` continues.
    pub fn decide(&mut self, decision: Decision) -> Result<DecisionOutcome, RoundError> {
        if decision.continues() {
            self.double()?;
            Ok(DecisionOutcome::Continued(self.deal_cards()?))
        } else {
            Ok(DecisionOutcome::Banked { payout: self.bank()? })
        }
    }

    /// Lose the stake. Reached only from an incorrect guess.
    fn forfeit(&mut self) {
        let lost = self.stake;
        self.stake = 0;
        self.phase = RoundPhase::Lost;

        info!(lost, "stake forfeited");
        self.events.push(RoundEvent::Forfeited { lost });
    }

    fn expect_phase(&self, operation: &'static str, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoundError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn current_stake(&self) -> u64 {
        self.stake
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Final payout, once the round is over.
    #[must_use]
    pub fn payout(&self) -> Option<u64> {
        self.phase.is_terminal().then_some(self.stake)
    }

    /// The reference card of the current pair.
    #[must_use]
    pub fn reference_card(&self) -> Option<Card> {
        self.reference
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Cards left in the round's deck.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Every guess evaluated so far.
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Every transition so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use crate::deck::DeckKind;

    fn spade(rank: Rank) -> Card {
        Card::new(rank, Some(Suit::Spade)).unwrap()
    }

    fn stacked(pairs: &[(Rank, Rank)]) -> Round {
        let deck = Deck::new(pairs.iter().flat_map(|&(r, c)| [spade(r), spade(c)]));
        Round::with_deck(RoundConfig::default(), deck, GameRng::new(1))
    }

    #[test]
    fn test_new_round_is_ready() {
        let round = Round::new(RoundConfig::default(), GameRng::new(5));
        assert_eq!(round.phase(), RoundPhase::Ready);
        assert_eq!(round.current_stake(), 20);
        assert_eq!(round.deck_len(), 54);
        assert_eq!(round.payout(), None);
        assert_eq!(round.reveal_challenger(), Err(RoundError::NoCardsDealt));
    }

    #[test]
    fn test_deal_returns_reference_and_holds_challenger() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine)]);
        let deal = round.deal_cards().unwrap();

        assert_eq!(deal.reference, spade(Rank::Five));
        assert!(!deal.replenished);
        assert_eq!(round.reference_card(), Some(spade(Rank::Five)));
        assert_eq!(round.reveal_challenger(), Ok(spade(Rank::Nine)));
        assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
        assert_eq!(round.deck_len(), 0);
    }

    #[test]
    fn test_correct_guess_awaits_decision() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine)]);
        round.deal_cards().unwrap();

        assert_eq!(round.evaluate_guess(Guess::Greater), Ok(true));
        assert_eq!(round.phase(), RoundPhase::AwaitingDecision);
        assert_eq!(round.current_stake(), 20);
    }

    #[test]
    fn test_wrong_guess_forfeits() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine)]);
        round.deal_cards().unwrap();

        assert_eq!(round.evaluate_guess(Guess::Less), Ok(false));
        assert_eq!(round.phase(), RoundPhase::Lost);
        assert_eq!(round.current_stake(), 0);
        assert_eq!(round.payout(), Some(0));
        assert_eq!(round.events().last(), Some(&RoundEvent::Forfeited { lost: 20 }));
    }

    #[test]
    fn test_unrecognized_guess_is_wrong() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine)]);
        round.deal_cards().unwrap();

        assert_eq!(round.evaluate_guess(Guess::Unrecognized), Ok(false));
        assert_eq!(round.phase(), RoundPhase::Lost);
    }

    #[test]
    fn test_identical_pair_is_wrong_both_ways() {
        for guess in [Guess::Greater, Guess::Less] {
            let deck = Deck::new([spade(Rank::Seven), spade(Rank::Seven)]);
            let mut round = Round::with_deck(RoundConfig::default(), deck, GameRng::new(1));
            round.deal_cards().unwrap();
            assert_eq!(round.evaluate_guess(guess), Ok(false));
        }
    }

    #[test]
    fn test_suit_breaks_rank_tie() {
        let reference = Card::new(Rank::Seven, Some(Suit::Club)).unwrap();
        let challenger = Card::new(Rank::Seven, Some(Suit::Heart)).unwrap();
        let mut round = Round::with_deck(RoundConfig::default(), Deck::new([reference, challenger]), GameRng::new(1));
        round.deal_cards().unwrap();

        assert_eq!(round.evaluate_guess(Guess::Greater), Ok(true));
    }

    #[test]
    fn test_bank_returns_stake() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine), (Rank::King, Rank::Two)]);
        round.deal_cards().unwrap();
        round.evaluate_guess(Guess::Greater).unwrap();
        round.decide(Decision::Continue).unwrap();
        round.evaluate_guess(Guess::Less).unwrap();

        assert_eq!(round.decide(Decision::Bank), Ok(DecisionOutcome::Banked { payout: 40 }));
        assert_eq!(round.phase(), RoundPhase::Banked);
        assert_eq!(round.payout(), Some(40));
    }

    #[test]
    fn test_unrecognized_decision_continues() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine), (Rank::King, Rank::Two)]);
        round.deal_cards().unwrap();
        round.evaluate_guess(Guess::Greater).unwrap();

        let outcome = round.decide(Decision::Unrecognized).unwrap();
        assert_eq!(
            outcome,
            DecisionOutcome::Continued(Deal { reference: spade(Rank::King), replenished: false })
        );
        assert_eq!(round.current_stake(), 40);
        assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
    }

    #[test]
    fn test_double_alone_waits_for_deal() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine)]);
        round.deal_cards().unwrap();
        round.evaluate_guess(Guess::Greater).unwrap();

        round.double().unwrap();
        assert_eq!(round.current_stake(), 40);
        assert_eq!(round.phase(), RoundPhase::Ready);
    }

    #[test]
    fn test_operations_rejected_in_wrong_phase() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine)]);

        assert_eq!(
            round.evaluate_guess(Guess::Greater),
            Err(RoundError::InvalidPhase { operation: "evaluate a guess", phase: RoundPhase::Ready })
        );
        assert!(matches!(round.double(), Err(RoundError::InvalidPhase { .. })));
        assert!(matches!(round.bank(), Err(RoundError::InvalidPhase { .. })));

        round.deal_cards().unwrap();
        assert!(matches!(round.deal_cards(), Err(RoundError::InvalidPhase { .. })));

        round.evaluate_guess(Guess::Less).unwrap();
        assert!(matches!(round.decide(Decision::Continue), Err(RoundError::InvalidPhase { .. })));
        assert_eq!(round.current_stake(), 0);
    }

    #[test]
    fn test_replenishes_when_fewer_than_two_cards() {
        let deck = Deck::new([spade(Rank::Ace)]);
        let config = RoundConfig::default().with_deck(DeckKind::Standard);
        let mut round = Round::with_deck(config, deck, GameRng::new(9));

        let deal = round.deal_cards().unwrap();
        assert!(deal.replenished);
        assert_eq!(round.deck_len(), 50);
        assert_eq!(round.events()[0], RoundEvent::DeckReplenished { discarded: 1 });
    }

    #[test]
    fn test_stake_overflow_is_reported() {
        let config = RoundConfig::new(u64::MAX / 2 + 1, u64::MAX);
        let deck = Deck::new([spade(Rank::Two), spade(Rank::Three)]);
        let mut round = Round::with_deck(config, deck, GameRng::new(1));
        round.deal_cards().unwrap();
        round.evaluate_guess(Guess::Greater).unwrap();

        assert_eq!(round.double(), Err(RoundError::StakeOverflow { stake: u64::MAX / 2 + 1 }));
        assert_eq!(round.phase(), RoundPhase::AwaitingDecision);
    }

    #[test]
    fn test_history_records_stake_at_guess() {
        let mut round = stacked(&[(Rank::Five, Rank::Nine), (Rank::King, Rank::Two)]);
        round.deal_cards().unwrap();
        round.evaluate_guess(Guess::Greater).unwrap();
        round.decide(Decision::Continue).unwrap();
        round.evaluate_guess(Guess::Greater).unwrap();

        let stakes: Vec<u64> = round.guesses().iter().map(|g| g.stake).collect();
        assert_eq!(stakes, vec![20, 40]);
        assert!(round.guesses()[0].correct);
        assert!(!round.guesses()[1].correct);
    }
}
