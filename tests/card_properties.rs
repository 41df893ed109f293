//! Property tests for card ordering, shuffling, and guess evaluation.
//!
//! Cards are sampled from the full joker deck; seeds are arbitrary.

use std::cmp::Ordering;

use hilo_engine::cards::Card;
use hilo_engine::core::{GameRng, RoundConfig, SessionConfig};
use hilo_engine::deck::DeckKind;
use hilo_engine::game::{Guess, MemorySink, Round, RoundPhase, Session};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    prop::sample::select(DeckKind::Jokers.composition())
}

proptest! {
    /// Rank value decides the order whenever the ranks differ.
    #[test]
    fn prop_rank_dominates_suit(a in any_card(), b in any_card()) {
        let (ra, rb) = (a.rank().value(), b.rank().value());
        if ra != rb {
            prop_assert_eq!(a.cmp(&b), ra.cmp(&rb));
        }
    }

    /// Equal ranks fall back to suit order.
    #[test]
    fn prop_suit_breaks_ties(a in any_card(), b in any_card()) {
        if a.rank() == b.rank() {
            let sa = a.suit().map_or(0, |s| s.value());
            let sb = b.suit().map_or(0, |s| s.value());
            prop_assert_eq!(a.cmp(&b), sa.cmp(&sb));
        }
    }

    /// Ordering agrees with equality and is antisymmetric.
    #[test]
    fn prop_order_consistent_with_eq(a in any_card(), b in any_card()) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// A shuffled deck holds exactly the cards it started with.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>(), jokers in any::<bool>()) {
        let kind = if jokers { DeckKind::Jokers } else { DeckKind::Standard };
        let mut deck = kind.build();
        deck.shuffle(&mut GameRng::new(seed));

        let mut shuffled: Vec<Card> = deck.iter().copied().collect();
        shuffled.sort();
        let mut expected = kind.composition();
        expected.sort();
        prop_assert_eq!(shuffled, expected);
    }

    /// Exactly one direction is correct for every dealt pair. A correct guess
    /// leaves the stake alone; a wrong one zeroes it.
    #[test]
    fn prop_one_direction_wins(seed in any::<u64>(), pick_correct in any::<bool>()) {
        let mut round = Round::new(RoundConfig::default(), GameRng::new(seed));
        round.deal_cards().unwrap();
        let reference = round.reference_card().unwrap();
        let challenger = round.reveal_challenger().unwrap();
        prop_assert_ne!(reference, challenger);

        let winning = if challenger > reference { Guess::Greater } else { Guess::Less };
        let guess = match (pick_correct, winning) {
            (true, g) => g,
            (false, Guess::Greater) => Guess::Less,
            (false, _) => Guess::Greater,
        };

        prop_assert_eq!(round.evaluate_guess(guess).unwrap(), pick_correct);
        prop_assert_eq!(round.current_stake(), if pick_correct { 20 } else { 0 });
        let expected_phase = if pick_correct { RoundPhase::AwaitingDecision } else { RoundPhase::Lost };
        prop_assert_eq!(round.phase(), expected_phase);
    }

    /// An unrecognized guess always loses.
    #[test]
    fn prop_unrecognized_guess_loses(seed in any::<u64>()) {
        let mut round = Round::new(RoundConfig::default(), GameRng::new(seed));
        round.deal_cards().unwrap();
        prop_assert!(!round.evaluate_guess(Guess::Unrecognized).unwrap());
        prop_assert_eq!(round.payout(), Some(0));
    }

    /// A lost round costs exactly the entry fee.
    #[test]
    fn prop_lost_round_costs_fee(seed in any::<u64>(), balance in 30u64..500) {
        let config = SessionConfig::new(balance, 25, 1000, 30);
        let mut session = Session::with_sink(config, GameRng::new(seed), MemorySink::new());
        let mut round = session.start_round().unwrap();
        round.deal_cards().unwrap();
        round.evaluate_guess(Guess::Unrecognized).unwrap();
        session.finish_round(round).unwrap();

        prop_assert_eq!(session.balance(), balance - 25);
    }
}
