//! JSON encoding of decks.
//!
//! A deck is written as an array of `{"rank": .., "suit": ..}` records, top
//! card first. Numeric ranks are integers, court cards and the ace are strings:
//!
//! ```json
//! [{"rank":10,"suit":"Hearts"},{"rank":"Jack","suit":"Hearts"}]
//! ```

use core::str::FromStr;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::error::Category;

use crate::card::Card;
use crate::error::MalformedDeckError;

use super::Deck;

impl Serialize for Deck {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.cards.len()))?;
        for card in &self.cards {
            seq.serialize_element(card)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Card>::deserialize(deserializer).map(Self::from)
    }
}

impl From<serde_json::Error> for MalformedDeckError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Data(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax {
                line: err.line(),
                column: err.column(),
            },
        }
    }
}

impl Deck {
    /// Encodes the deck as JSON, top card first.
    ///
    /// ```
    /// use deckrs::{Card, Deck, Rank, Suit};
    ///
    /// let deck = Deck::from(vec![
    ///     Card::new(Rank::Ten, Suit::Hearts),
    ///     Card::new(Rank::Jack, Suit::Spades),
    /// ]);
    /// assert_eq!(
    ///     deck.dumps(),
    ///     r#"[{"rank":10,"suit":"Hearts"},{"rank":"Jack","suit":"Spades"}]"#
    /// );
    /// ```
    ///
    /// # Panics
    ///
    /// Never in practice: every rank, suit and card has a JSON encoding.
    #[must_use]
    pub fn dumps(&self) -> String {
        serde_json::to_string(self).expect("cards always encode as JSON")
    }

    /// Decodes a deck written by [`dumps`](Self::dumps).
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON, or if it is not an
    /// array of records whose rank and suit are valid. No partial deck is
    /// returned.
    pub fn loads(text: &str) -> Result<Self, MalformedDeckError> {
        let deck: Self = serde_json::from_str(text)?;
        log::debug!("loaded deck of {} cards", deck.len());
        Ok(deck)
    }
}

impl FromStr for Deck {
    type Err = MalformedDeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::loads(s)
    }
}
