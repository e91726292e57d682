//! Card types: ranks, suits, and the `(rank, suit)` pair.

use core::fmt;
use core::str::FromStr;

use alloc::borrow::ToOwned;
use alloc::string::String;
use serde::de::{self, IgnoredAny, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ParseRankError, ParseSuitError};

/// Number of cards in one standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// Card rank.
///
/// Numeric ranks carry their face value as discriminant; the court cards and
/// the ace follow on from ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three = 3,
    /// 4.
    Four = 4,
    /// 5.
    Five = 5,
    /// 6.
    Six = 6,
    /// 7.
    Seven = 7,
    /// 8.
    Eight = 8,
    /// 9.
    Nine = 9,
    /// 10.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
}

impl Rank {
    /// Every rank, in the order decks are built.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the face value for numeric ranks (2 through 10).
    ///
    /// ```
    /// use deckrs::Rank;
    ///
    /// assert_eq!(Rank::Seven.number(), Some(7));
    /// assert_eq!(Rank::Queen.number(), None);
    /// ```
    #[must_use]
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::Jack | Self::Queen | Self::King | Self::Ace => None,
            numeric => Some(numeric as u8),
        }
    }

    /// Returns the numeric rank with the given face value, if any.
    #[must_use]
    pub const fn from_number(value: u8) -> Option<Self> {
        match value {
            2..=10 => Some(Self::ALL[value as usize - 2]),
            _ => None,
        }
    }

    /// Returns the court rank (or ace) with the given name, if any.
    #[must_use]
    pub fn from_face_name(name: &str) -> Option<Self> {
        match name {
            "Jack" => Some(Self::Jack),
            "Queen" => Some(Self::Queen),
            "King" => Some(Self::King),
            "Ace" => Some(Self::Ace),
            _ => None,
        }
    }

    /// Returns the rank token: `"2"` through `"10"`, or the face name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns the one-letter index used on card corners (`10` stays two characters).
    #[must_use]
    pub const fn index(self) -> &'static str {
        match self {
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            numeric => numeric.name(),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    /// Parses a rank token such as `"7"`, `"10"` or `"Jack"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .or_else(|| Self::from_face_name(s))
            .ok_or_else(|| ParseRankError(s.to_owned()))
    }
}

// Numeric ranks travel as integers, faces as their names.
impl Serialize for Rank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.number() {
            Some(value) => serializer.serialize_u8(value),
            None => serializer.serialize_str(self.name()),
        }
    }
}

struct RankVisitor;

impl Visitor<'_> for RankVisitor {
    type Value = Rank;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer 2 through 10 or one of \"Jack\", \"Queen\", \"King\", \"Ace\"")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Rank, E> {
        u8::try_from(value)
            .ok()
            .and_then(Rank::from_number)
            .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Rank, E> {
        u8::try_from(value)
            .ok()
            .and_then(Rank::from_number)
            .ok_or_else(|| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Rank, E> {
        Rank::from_face_name(value).ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RankVisitor)
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit, in the order decks are built.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| ParseSuitError(s.to_owned()))
    }
}

/// A playing card.
///
/// Cards are plain values: two cards are equal when both rank and suit match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns a compact display of the card, e.g. `A♠` or `10♥`.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Ace, Suit::Spades);
    /// assert_eq!(card.to_string(), "Ace of Spades");
    /// assert_eq!(card.symbol().to_string(), "A♠");
    /// ```
    #[must_use]
    pub const fn symbol(&self) -> CardSymbol {
        CardSymbol(*self)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

// Cards are read only from `{"rank": .., "suit": ..}` records; other keys are skipped.
struct CardVisitor;

impl<'de> Visitor<'de> for CardVisitor {
    type Value = Card;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a card record with `rank` and `suit` fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Card, A::Error> {
        let mut rank = None;
        let mut suit = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "rank" if rank.is_some() => return Err(de::Error::duplicate_field("rank")),
                "suit" if suit.is_some() => return Err(de::Error::duplicate_field("suit")),
                "rank" => rank = Some(map.next_value()?),
                "suit" => suit = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        let rank = rank.ok_or_else(|| de::Error::missing_field("rank"))?;
        let suit = suit.ok_or_else(|| de::Error::missing_field("suit"))?;
        Ok(Card::new(rank, suit))
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CardVisitor)
    }
}

/// Compact display of a [`Card`], returned by [`Card::symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSymbol(Card);

impl fmt::Display for CardSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0.rank.index(), self.0.suit.symbol())
    }
}
