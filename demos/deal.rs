//! Deals a few poker hands from a freshly built deck.
//!
//! Usage: `cargo run --example deal -- [CONFIG_JSON] [SEED]`, e.g.
//! `cargo run --example deal -- '{"number_decks": 2, "exclude_rank": [2]}' 7`.
//! Set `RUST_LOG=trace` to see the deck's own logging.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Deck, EmptyDeckError};

const PLAYERS: usize = 4;
const HAND_SIZE: usize = 5;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = args.next().unwrap_or_else(|| "{}".to_owned());
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut deck = match Deck::from_config(&config) {
        Ok(deck) => deck,
        Err(err) => {
            eprintln!("Invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("Built {} cards: {}", deck.len(), deck.summary());

    deck.shuffle_seeded(seed);
    let cut_at = deck.len() / 2;
    if let Err(err) = deck.cut(cut_at) {
        println!("Skipping cut: {err}");
    }
    println!("Shuffled with seed {seed} and cut: {}", deck.summary());

    for player in 1..=PLAYERS {
        match deal_hand(&mut deck) {
            Ok(hand) => println!("Player {player}: {hand}"),
            Err(err) => {
                println!("Player {player}: {err}");
                break;
            }
        }
    }

    let dump = deck.dumps();
    println!("Remaining {} cards serialize to {} bytes:", deck.len(), dump.len());
    println!("{dump}");

    match Deck::loads(&dump) {
        Ok(restored) if restored == deck => {
            println!("Reloaded deck matches.");
            ExitCode::SUCCESS
        }
        Ok(_) => {
            eprintln!("Reloaded deck differs from the original.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Failed to reload deck: {err}");
            ExitCode::FAILURE
        }
    }
}

fn deal_hand(deck: &mut Deck) -> Result<String, EmptyDeckError> {
    let cards = deck.deal(HAND_SIZE)?;
    Ok(cards
        .iter()
        .map(|card| card.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" "))
}
