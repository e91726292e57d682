//! Deck construction options.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::Deserialize;

use crate::card::{Rank, Suit};
use crate::error::ConfigError;

/// Largest `number_decks` accepted by [`DeckOptions::from_json`].
pub const MAX_NUMBER_DECKS: usize = 1 << 16;

/// Configuration for building a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::{DeckOptions, Rank};
///
/// let options = DeckOptions::default()
///     .with_number_decks(2)
///     .with_excluded_rank(Rank::Two)
///     .with_excluded_rank(Rank::Jack);
/// assert_eq!(options.deck_len(), Some(88));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// How many standard decks to build, one after the other.
    pub number_decks: usize,
    /// Ranks omitted from every deck.
    pub exclude_rank: Vec<Rank>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            number_decks: 1,
            exclude_rank: Vec::new(),
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_number_decks(6);
    /// assert_eq!(options.number_decks, 6);
    /// ```
    #[must_use]
    pub const fn with_number_decks(mut self, number_decks: usize) -> Self {
        self.number_decks = number_decks;
        self
    }

    /// Excludes a rank. Excluding the same rank twice has no further effect.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckOptions, Rank};
    ///
    /// let options = DeckOptions::default()
    ///     .with_excluded_rank(Rank::Ace)
    ///     .with_excluded_rank(Rank::Ace);
    /// assert_eq!(options.exclude_rank, vec![Rank::Ace]);
    /// ```
    #[must_use]
    pub fn with_excluded_rank(mut self, rank: Rank) -> Self {
        if !self.exclude_rank.contains(&rank) {
            self.exclude_rank.push(rank);
        }
        self
    }

    /// Excludes every rank in `ranks`.
    #[must_use]
    pub fn with_excluded_ranks(self, ranks: impl IntoIterator<Item = Rank>) -> Self {
        ranks.into_iter().fold(self, Self::with_excluded_rank)
    }

    /// Returns the ranks that survive exclusion, in build order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        Rank::ALL
            .into_iter()
            .filter(|rank| !self.exclude_rank.contains(rank))
    }

    /// Returns the number of cards a deck built from these options holds, or
    /// `None` if that count does not fit in a `usize`.
    #[must_use]
    pub fn deck_len(&self) -> Option<usize> {
        self.number_decks
            .checked_mul(self.ranks().count())?
            .checked_mul(Suit::ALL.len())
    }

    /// Parses options from their JSON form.
    ///
    /// Both keys are optional:
    ///
    /// ```
    /// use deckrs::{DeckOptions, Rank};
    ///
    /// let options =
    ///     DeckOptions::from_json(r#"{"number_decks": 2, "exclude_rank": [2, "Jack"]}"#).unwrap();
    /// assert_eq!(options.number_decks, 2);
    /// assert_eq!(options.exclude_rank, vec![Rank::Two, Rank::Jack]);
    ///
    /// assert_eq!(DeckOptions::from_json("{}").unwrap(), DeckOptions::default());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `number_decks` is negative or above
    /// [`MAX_NUMBER_DECKS`], if an excluded rank is not one of the thirteen
    /// ranks, or if the text is not a JSON object of that shape.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawOptions =
            serde_json::from_str(text).map_err(|err| ConfigError::Malformed(err.to_string()))?;

        let number_decks = match raw.number_decks {
            None => 1,
            Some(n) if n < 0 => return Err(ConfigError::NegativeDecks(n)),
            Some(n) => usize::try_from(n)
                .ok()
                .filter(|&n| n <= MAX_NUMBER_DECKS)
                .ok_or(ConfigError::TooManyDecks(n))?,
        };

        let ranks = raw
            .exclude_rank
            .into_iter()
            .map(RankToken::into_rank)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::default()
            .with_number_decks(number_decks)
            .with_excluded_ranks(ranks))
    }
}

/// Options as written in JSON, before domain checks.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    #[serde(default)]
    number_decks: Option<i128>,
    #[serde(default)]
    exclude_rank: Vec<RankToken>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RankToken {
    Number(i64),
    Name(String),
}

impl RankToken {
    fn into_rank(self) -> Result<Rank, ConfigError> {
        match self {
            Self::Number(n) => u8::try_from(n)
                .ok()
                .and_then(Rank::from_number)
                .ok_or_else(|| ConfigError::UnknownRank(n.to_string())),
            Self::Name(name) => Rank::from_face_name(&name).ok_or(ConfigError::UnknownRank(name)),
        }
    }
}
