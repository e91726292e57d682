//! A standard playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type that builds one or more standard decks
//! (optionally without some ranks), shuffles, cuts and deals them, and writes
//! them to and reads them from a portable JSON form.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckOptions, Rank};
//!
//! let options = DeckOptions::default()
//!     .with_number_decks(2)
//!     .with_excluded_rank(Rank::Two);
//! let mut deck = Deck::build(&options);
//! deck.shuffle_seeded(42).cut(10).unwrap();
//!
//! let hand = deck.deal(5).unwrap();
//! assert_eq!(hand.len(), 5);
//!
//! let restored = Deck::loads(&deck.dumps()).unwrap();
//! assert_eq!(restored, deck);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, CardSymbol, Rank, STANDARD_DECK_SIZE, Suit};
pub use deck::{Deck, Summary};
pub use error::{
    ConfigError, CutError, EmptyDeckError, MalformedDeckError, ParseRankError, ParseSuitError,
};
pub use options::{DeckOptions, MAX_NUMBER_DECKS};
