//! The deck: an ordered multiset of cards.

use core::ops::Index;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Suit};
use crate::error::ConfigError;
use crate::options::DeckOptions;

mod codec;
mod display;
mod ops;

pub use display::Summary;

/// An ordered sequence of cards, top first.
///
/// Index 0 is the top of the deck, the next card [`draw`](Self::draw) returns.
/// Duplicates are allowed: a deck built from several standard decks holds
/// each card several times.
#[derive(Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates one standard, unshuffled 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        Self::build(&DeckOptions::default())
    }

    /// Creates a deck holding no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Builds an unshuffled deck from the given options.
    ///
    /// Each of the `number_decks` repetitions appends every remaining rank in
    /// order, and for each rank every suit in order (clubs, diamonds, hearts,
    /// spades).
    ///
    /// ```
    /// use deckrs::{Card, Deck, DeckOptions, Rank, Suit};
    ///
    /// let deck = Deck::build(&DeckOptions::default().with_excluded_rank(Rank::Two));
    /// assert_eq!(deck.len(), 48);
    /// assert_eq!(deck[0], Card::new(Rank::Three, Suit::Clubs));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the number of cards overflows `usize`, as allocating a `Vec`
    /// of that size would. Options read with [`DeckOptions::from_json`] never
    /// do.
    #[must_use]
    pub fn build(options: &DeckOptions) -> Self {
        let len = options.deck_len().expect("deck length overflows usize");
        let mut cards = VecDeque::with_capacity(len);

        for _ in 0..options.number_decks {
            for rank in options.ranks() {
                for suit in Suit::ALL {
                    cards.push_back(Card::new(rank, suit));
                }
            }
        }

        log::debug!(
            "built deck of {} cards from {} deck(s), {} rank(s) excluded",
            cards.len(),
            options.number_decks,
            options.exclude_rank.len()
        );

        Self { cards }
    }

    /// Builds a deck from JSON options, see [`DeckOptions::from_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid. No deck is built in
    /// that case.
    pub fn from_config(text: &str) -> Result<Self, ConfigError> {
        DeckOptions::from_json(text).map(|options| Self::build(&options))
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the card at `index`, counting from the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterates over the cards from top to bottom.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.cards.iter(),
        }
    }

    /// Returns the cards from top to bottom.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }

    /// Counts how many times each card appears.
    ///
    /// ```
    /// use deckrs::{Card, Deck, DeckOptions, Rank, Suit};
    ///
    /// let deck = Deck::build(&DeckOptions::default().with_number_decks(2));
    /// let tally = deck.tally();
    /// assert_eq!(tally.len(), 52);
    /// assert_eq!(tally[&Card::new(Rank::Ace, Suit::Hearts)], 2);
    /// ```
    #[must_use]
    pub fn tally(&self) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    /// Places the cards at the bottom of the deck.
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

/// Borrowing iterator over a [`Deck`], top first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: vec_deque::Iter<'a, Card>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`Deck`], top first.
#[derive(Debug, Clone)]
pub struct IntoIter {
    inner: vec_deque::IntoIter<Card>,
}

impl Iterator for IntoIter {
    type Item = Card;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.cards.into_iter(),
        }
    }
}
