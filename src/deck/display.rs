use core::fmt;

use crate::card::Card;

use super::Deck;

/// Cards shown at each end of a [`Summary`].
const SUMMARY_EDGE: usize = 3;

fn write_cards<'a>(
    f: &mut fmt::Formatter<'_>,
    cards: impl Iterator<Item = &'a Card>,
) -> fmt::Result {
    for (i, card) in cards.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    Ok(())
}

/// Shortened display of a [`Deck`]: the top three and bottom three cards.
///
/// Meant for logs and debugging; use [`Deck::dumps`] for a format that can be
/// read back.
#[derive(Clone, Copy)]
pub struct Summary<'a>(&'a Deck);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = &self.0.cards;
        let len = cards.len();

        if len <= 2 * SUMMARY_EDGE {
            return fmt::Display::fmt(self.0, f);
        }

        f.write_str("[ ")?;
        write_cards(f, cards.range(..SUMMARY_EDGE))?;
        f.write_str(", ..., ")?;
        write_cards(f, cards.range(len - SUMMARY_EDGE..))?;
        f.write_str(" ]")
    }
}

impl fmt::Debug for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Deck {
    /// Returns a shortened display of the deck.
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// assert_eq!(
    ///     Deck::new().summary().to_string(),
    ///     "[ 2 of Clubs, 2 of Diamonds, 2 of Hearts, ..., Ace of Diamonds, Ace of Hearts, Ace of Spades ]"
    /// );
    /// ```
    #[must_use]
    pub const fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// Lists every card, top first.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return f.write_str("[ ]");
        }
        f.write_str("[ ")?;
        write_cards(f, self.cards.iter())?;
        f.write_str(" ]")
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} cards) {}", self.cards.len(), self.summary())
    }
}
