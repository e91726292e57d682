use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::{CutError, EmptyDeckError};

use super::Deck;

impl Deck {
    /// Shuffles the deck with a thread-local random generator.
    ///
    /// Returns the deck so calls can be chained.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    pub fn shuffle(&mut self) -> &mut Self {
        self.shuffle_with(&mut rand::rng())
    }

    /// Shuffles the deck with the given random generator.
    ///
    /// Every ordering of the cards is equally likely.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.make_contiguous().shuffle(rng);
        log::trace!("shuffled {} cards", self.cards.len());
        self
    }

    /// Shuffles the deck with a generator seeded from `seed`.
    ///
    /// The same seed always yields the same order for the same starting deck.
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let mut a = Deck::new();
    /// let mut b = Deck::new();
    /// a.shuffle_seeded(7);
    /// b.shuffle_seeded(7);
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle_seeded(&mut self, seed: u64) -> &mut Self {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Cuts the deck at `index`.
    ///
    /// The top `index + 1` cards move, in order, to the bottom of the deck.
    /// Cutting at the last index leaves the deck as it was.
    ///
    /// ```
    /// use deckrs::{Card, Deck, Rank, Suit};
    ///
    /// let cards = [Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    ///     .map(|rank| Card::new(rank, Suit::Hearts));
    /// let mut deck = Deck::from(cards.to_vec());
    /// deck.cut(1).unwrap();
    /// assert_eq!(deck.cards(), [cards[2], cards[3], cards[0], cards[1]]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not less than the deck length. The deck
    /// is left unchanged.
    pub fn cut(&mut self, index: usize) -> Result<&mut Self, CutError> {
        let len = self.cards.len();
        if index >= len {
            return Err(CutError::OutOfRange { index, len });
        }

        self.cards.rotate_left((index + 1) % len);
        log::trace!("cut {len} cards at index {index}");
        Ok(self)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop_front().ok_or(EmptyDeckError {
            requested: 1,
            remaining: 0,
        })
    }

    /// Removes and returns the top `count` cards, top first.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than `count` cards remain. No card is removed
    /// in that case.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, EmptyDeckError> {
        let remaining = self.cards.len();
        if count > remaining {
            return Err(EmptyDeckError {
                requested: count,
                remaining,
            });
        }

        log::trace!("dealing {count} of {remaining} cards");
        Ok(self.cards.drain(..count).collect())
    }
}
