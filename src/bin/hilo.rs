//! Console front-end: play a session at the terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hilo_engine::{
    DecisionOutcome, DeckKind, Decision, GameRng, Guess, Round, RoundPhase, Session, SessionConfig,
    SessionError, SessionStatus,
};
use tracing::{debug, Level};

#[derive(Parser, Debug)]
#[command(name = "hilo", about = "Higher/lower card game against the house")]
struct Args {
    /// YAML session configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting balance
    #[arg(long)]
    balance: Option<u64>,

    /// Points paid to enter a round
    #[arg(long)]
    entry_fee: Option<u64>,

    /// Balance that wins the session
    #[arg(long)]
    win: Option<u64>,

    /// Minimum balance to enter a round
    #[arg(long)]
    lose: Option<u64>,

    /// Play without jokers
    #[arg(long)]
    standard_deck: bool,

    /// RNG seed, for replaying a session
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: Level,
}

fn build_config(args: &Args) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_yaml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(balance) = args.balance {
        config.starting_balance = balance;
    }
    if let Some(fee) = args.entry_fee {
        config.entry_fee = fee;
    }
    if let Some(win) = args.win {
        config.win_threshold = win;
    }
    if let Some(lose) = args.lose {
        config.lose_threshold = lose;
    }
    if args.standard_deck {
        config.round.deck = DeckKind::Standard;
    }

    config.validate().context("invalid session configuration")?;
    Ok(config)
}

/// Reads one trimmed line; `None` at end of input.
fn prompt(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn depleted_message(lose_threshold: u64, balance: u64) -> String {
    format!("Not enough {lose_threshold} points (having {balance} now) to continue!")
}

/// Drive one round to a terminal phase. Returns `false` if input ran out.
fn play_round(round: &mut Round, input: &mut impl BufRead) -> Result<bool> {
    let deal = round.deal_cards()?;
    if deal.replenished {
        println!("(The deck ran low and was replaced.)");
    }
    println!("House's card: {}", deal.reference);

    loop {
        let Some(line) = prompt(input, "Greater or less? (g/l): ")? else {
            return Ok(false);
        };
        let correct = round.evaluate_guess(Guess::parse(&line))?;
        println!("Your card: {}", round.reveal_challenger()?);

        if !correct {
            println!("Wrong!");
            return Ok(true);
        }
        println!("Correct!");
        if round.phase() == RoundPhase::Won {
            return Ok(true);
        }

        let Some(line) = prompt(input, "Continue? (y/stop): ")? else {
            return Ok(false);
        };
        match round.decide(Decision::parse(&line))? {
            DecisionOutcome::Banked { .. } => return Ok(true),
            DecisionOutcome::Continued(deal) => {
                if deal.replenished {
                    println!("(The deck ran low and was replaced.)");
                }
                println!("Reward doubled to {}", round.current_stake());
                println!("House's card: {}", deal.reference);
            }
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let config = build_config(&args)?;
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let seed = rng.seed();
    let mut session = Session::new(config, rng);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("START THE GAME WITH {} POINTS (seed {seed})", session.balance());
    loop {
        let mut round = match session.start_round() {
            Ok(round) => round,
            Err(SessionError::Closed(SessionStatus::Depleted)) => {
                println!("{}", depleted_message(session.config().lose_threshold, session.balance()));
                break;
            }
            Err(err) => {
                println!("{err}");
                break;
            }
        };
        println!(
            "Paid {} points. Current points: {}",
            session.config().entry_fee,
            session.balance()
        );

        if !play_round(&mut round, &mut input)? {
            println!("\nInput closed; abandoning the round.");
            break;
        }

        let payout = round.payout().unwrap_or_default();
        let status = session.finish_round(round)?;
        println!("Match reward: {payout}. Total points: {}", session.balance());
        match status {
            SessionStatus::Won => {
                println!("You win!");
                break;
            }
            SessionStatus::Depleted => {
                println!("{}", depleted_message(session.config().lose_threshold, session.balance()));
                break;
            }
            SessionStatus::Stalled => {
                println!("Game ended without win or loss.");
                break;
            }
            SessionStatus::Playable => {}
        }
    }

    debug!(rounds = session.rounds_played(), "session over");
    println!("Final score: {}", session.balance());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::parse_from(["hilo", "--balance", "100", "--lose", "40", "--standard-deck"]);
        let config = build_config(&args).unwrap();

        assert_eq!(config.starting_balance, 100);
        assert_eq!(config.lose_threshold, 40);
        assert_eq!(config.entry_fee, 25);
        assert_eq!(config.round.deck, DeckKind::Standard);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let args = Args::parse_from(["hilo", "--win", "20", "--lose", "30"]);
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_rejects_balance_already_winning() {
        let args = Args::parse_from(["hilo", "--balance", "1000"]);
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_depleted_message() {
        assert_eq!(
            depleted_message(30, 10),
            "Not enough 30 points (having 10 now) to continue!"
        );
    }

    #[test]
    fn test_scripted_round_banks() {
        let config = SessionConfig::default();
        let mut round = Round::new(config.round, GameRng::new(4));
        // Peek at the pair on a clone to guess correctly, then bank.
        let mut probe = round.clone();
        let reference = probe.deal_cards().unwrap().reference;
        let challenger = probe.reveal_challenger().unwrap();
        let guess = if challenger > reference { "g" } else { "l" };
        let script = format!("{guess}\nstop\n");

        let finished = play_round(&mut round, &mut script.as_bytes()).unwrap();
        assert!(finished);
        assert!(round.is_over());
        // An exact duplicate pair is impossible in a single deck
        assert_eq!(round.payout(), Some(20));
    }
}
