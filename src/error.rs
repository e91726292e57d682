//! Error types for deck operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while reading a deck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The number of decks is negative.
    #[error("number_decks must be non-negative, got {0}")]
    NegativeDecks(i128),
    /// The number of decks is above the supported maximum.
    #[error("number_decks must be at most {max}, got {0}", max = crate::options::MAX_NUMBER_DECKS)]
    TooManyDecks(i128),
    /// An excluded rank is not one of the thirteen ranks.
    #[error("unknown rank `{0}` in exclude_rank")]
    UnknownRank(String),
    /// The configuration text is not an object of the expected shape.
    #[error("malformed configuration: {0}")]
    Malformed(String),
}

/// Error returned when drawing from a deck that has too few cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough cards in the deck: requested {requested}, {remaining} remaining")]
pub struct EmptyDeckError {
    /// Number of cards requested.
    pub requested: usize,
    /// Number of cards left in the deck.
    pub remaining: usize,
}

/// Errors that can occur when cutting a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// The cut index does not name a card in the deck.
    #[error("cut index {index} is out of range for a deck of {len} cards")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The deck length.
        len: usize,
    },
}

/// Errors that can occur when loading a serialized deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDeckError {
    /// The text is not valid JSON.
    #[error("invalid deck syntax at line {line}, column {column}")]
    Syntax {
        /// Line of the offending character (1-based).
        line: usize,
        /// Column of the offending character (1-based).
        column: usize,
    },
    /// The JSON is well formed but does not describe a deck.
    #[error("invalid deck data: {0}")]
    Data(String),
}

/// Error returned when a string is not a rank token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rank `{0}`")]
pub struct ParseRankError(pub String);

/// Error returned when a string is not a suit name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown suit `{0}`")]
pub struct ParseSuitError(pub String);
