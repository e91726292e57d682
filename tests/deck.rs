//! Deck integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, CutError, Deck, DeckOptions, EmptyDeckError, Rank, STANDARD_DECK_SIZE, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn four_cards() -> [Card; 4] {
    [
        card(Rank::Ace, Suit::Spades),
        card(Rank::King, Suit::Hearts),
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::Jack, Suit::Clubs),
    ]
}

#[test]
fn card_equality_and_display() {
    let ace = card(Rank::Ace, Suit::Spades);
    assert_eq!(ace, card(Rank::Ace, Suit::Spades));
    assert_ne!(ace, card(Rank::Ace, Suit::Hearts));
    assert_ne!(ace, card(Rank::King, Suit::Spades));

    assert_eq!(ace.rank(), Rank::Ace);
    assert_eq!(ace.suit(), Suit::Spades);
    assert_eq!(ace.to_string(), "Ace of Spades");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
    assert_eq!(card(Rank::Ten, Suit::Hearts).symbol().to_string(), "10♥");
    assert_eq!(card(Rank::Queen, Suit::Clubs).symbol().to_string(), "Q♣");
}

#[test]
fn rank_and_suit_tokens() {
    assert_eq!("2".parse::<Rank>().unwrap(), Rank::Two);
    assert_eq!("10".parse::<Rank>().unwrap(), Rank::Ten);
    assert_eq!("Jack".parse::<Rank>().unwrap(), Rank::Jack);
    assert!("1".parse::<Rank>().is_err());
    assert!("11".parse::<Rank>().is_err());
    assert!("jack".parse::<Rank>().is_err());

    assert_eq!("Hearts".parse::<Suit>().unwrap(), Suit::Hearts);
    assert!("Stars".parse::<Suit>().is_err());

    for rank in Rank::ALL {
        assert_eq!(rank.name().parse::<Rank>().unwrap(), rank);
    }
    assert_eq!(Rank::from_number(10), Some(Rank::Ten));
    assert_eq!(Rank::from_number(11), None);
}

#[test]
fn standard_deck_has_52_distinct_cards() {
    let deck = Deck::new();
    assert_eq!(deck.len(), STANDARD_DECK_SIZE);

    let distinct: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(distinct.len(), STANDARD_DECK_SIZE);
}

#[test]
fn build_is_rank_major_suit_minor() {
    let deck = Deck::new();
    assert_eq!(deck[0], card(Rank::Two, Suit::Clubs));
    assert_eq!(deck[1], card(Rank::Two, Suit::Diamonds));
    assert_eq!(deck[2], card(Rank::Two, Suit::Hearts));
    assert_eq!(deck[3], card(Rank::Two, Suit::Spades));
    assert_eq!(deck[4], card(Rank::Three, Suit::Clubs));
    assert_eq!(deck[51], card(Rank::Ace, Suit::Spades));
}

#[test]
fn double_deck_repeats_every_card_twice_in_order() {
    let deck = Deck::build(&DeckOptions::default().with_number_decks(2));
    assert_eq!(deck.len(), 104);
    assert!(deck.tally().values().all(|&count| count == 2));

    let cards = deck.cards();
    assert_eq!(cards[..52], cards[52..]);
}

#[test]
fn build_length_matches_formula() {
    let excluded = [Rank::Two, Rank::Five, Rank::Queen, Rank::Ace];
    for number_decks in 0..4 {
        for n_excluded in 0..=excluded.len() {
            let options = DeckOptions::default()
                .with_number_decks(number_decks)
                .with_excluded_ranks(excluded[..n_excluded].iter().copied());
            let deck = Deck::build(&options);
            assert_eq!(deck.len(), number_decks * (13 - n_excluded) * 4);
            assert_eq!(Some(deck.len()), options.deck_len());
        }
    }
}

#[test]
fn excluded_ranks_are_absent() {
    let options = DeckOptions::default().with_excluded_ranks([Rank::Two, Rank::Jack]);
    let deck = Deck::build(&options);
    assert_eq!(deck.len(), 44);
    assert!(
        deck.iter()
            .all(|c| c.rank() != Rank::Two && c.rank() != Rank::Jack)
    );
}

#[test]
fn excluding_every_rank_yields_an_empty_deck() {
    let deck = Deck::build(&DeckOptions::default().with_excluded_ranks(Rank::ALL));
    assert!(deck.is_empty());
}

#[test]
fn zero_decks_is_empty() {
    let deck = Deck::build(&DeckOptions::default().with_number_decks(0));
    assert!(deck.is_empty());
    assert_eq!(deck, Deck::empty());
}

#[test]
fn shuffle_preserves_multiset() {
    let mut deck = Deck::build(&DeckOptions::default().with_number_decks(3));
    let before = deck.tally();
    deck.shuffle();
    assert_eq!(deck.len(), 156);
    assert_eq!(deck.tally(), before);
}

#[test]
fn shuffle_changes_order() {
    let mut deck = Deck::new();
    deck.shuffle_seeded(1);
    assert_ne!(deck, Deck::new());
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle_seeded(99).shuffle_seeded(100);
    b.shuffle_with(&mut ChaCha8Rng::seed_from_u64(99))
        .shuffle_with(&mut ChaCha8Rng::seed_from_u64(100));
    assert_eq!(a, b);
}

#[test]
fn shuffle_of_tiny_decks_is_trivial() {
    let mut empty = Deck::empty();
    empty.shuffle();
    assert!(empty.is_empty());

    let single = card(Rank::Nine, Suit::Clubs);
    let mut one = Deck::from(vec![single]);
    one.shuffle();
    assert_eq!(one.cards(), [single]);
}

#[test]
fn cut_rotates_left_by_index_plus_one() {
    let [a, b, c, d] = four_cards();
    let mut deck = Deck::from(four_cards().to_vec());
    deck.cut(1).unwrap();
    assert_eq!(deck.cards(), [c, d, a, b]);

    let mut deck = Deck::from(four_cards().to_vec());
    deck.cut(0).unwrap();
    assert_eq!(deck.cards(), [b, c, d, a]);
}

#[test]
fn cut_at_last_index_is_a_no_op() {
    let mut deck = Deck::from(four_cards().to_vec());
    deck.cut(3).unwrap();
    assert_eq!(deck.cards(), four_cards());
}

#[test]
fn cut_out_of_range_leaves_deck_untouched() {
    let mut deck = Deck::from(four_cards().to_vec());
    assert_eq!(
        deck.cut(4).unwrap_err(),
        CutError::OutOfRange { index: 4, len: 4 }
    );
    assert_eq!(deck.cards(), four_cards());

    let mut empty = Deck::empty();
    assert_eq!(
        empty.cut(0).unwrap_err(),
        CutError::OutOfRange { index: 0, len: 0 }
    );
}

#[test]
fn shuffle_and_cut_chain() {
    let mut deck = Deck::new();
    let before = deck.tally();
    deck.shuffle_seeded(5).cut(25).unwrap().shuffle_seeded(6);
    assert_eq!(deck.tally(), before);
}

#[test]
fn draw_empties_front_to_back_then_fails() {
    let mut deck = Deck::from(four_cards().to_vec());
    for expected in four_cards() {
        assert_eq!(deck.draw().unwrap(), expected);
    }
    assert!(deck.is_empty());
    assert_eq!(
        deck.draw().unwrap_err(),
        EmptyDeckError {
            requested: 1,
            remaining: 0
        }
    );
}

#[test]
fn deal_is_atomic() {
    let mut deck = Deck::from(four_cards().to_vec());
    let [a, b, c, d] = four_cards();

    assert_eq!(deck.deal(3).unwrap(), [a, b, c]);
    assert_eq!(
        deck.deal(2).unwrap_err(),
        EmptyDeckError {
            requested: 2,
            remaining: 1
        }
    );
    assert_eq!(deck.cards(), [d]);
    assert!(deck.deal(0).unwrap().is_empty());
    assert_eq!(deck.deal(1).unwrap(), [d]);
}

#[test]
fn read_access() {
    let deck = Deck::from(four_cards().to_vec());
    let [a, _, _, d] = four_cards();

    assert_eq!(deck.peek(), Some(&a));
    assert_eq!(deck.get(3), Some(&d));
    assert_eq!(deck.get(4), None);
    assert_eq!(deck[0], a);
    assert!(!deck.is_empty());
    assert!(Deck::empty().peek().is_none());
}

#[test]
fn iteration_reflects_live_state_and_restarts() {
    let mut deck = Deck::from(four_cards().to_vec());
    let first: Vec<Card> = deck.iter().copied().collect();
    let again: Vec<Card> = (&deck).into_iter().copied().collect();
    assert_eq!(first, again);
    assert_eq!(deck.iter().len(), 4);

    deck.draw().unwrap();
    let after: Vec<Card> = deck.iter().copied().collect();
    assert_eq!(after, first[1..]);

    let reversed: Vec<Card> = deck.iter().rev().copied().collect();
    assert_eq!(reversed[0], four_cards()[3]);

    let owned: Vec<Card> = deck.into_iter().collect();
    assert_eq!(owned, first[1..]);
}

#[test]
fn collect_and_extend() {
    let mut deck: Deck = four_cards().into_iter().collect();
    deck.extend([card(Rank::Two, Suit::Clubs)]);
    assert_eq!(deck.len(), 5);
    assert_eq!(deck[4], card(Rank::Two, Suit::Clubs));
}

#[test]
fn full_display_lists_every_card() {
    let deck = Deck::from(vec![
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
    ]);
    assert_eq!(deck.to_string(), "[ Ace of Spades, 10 of Hearts ]");
    assert_eq!(Deck::empty().to_string(), "[ ]");
}

#[test]
fn summary_shows_both_ends() {
    let deck = Deck::new();
    assert_eq!(
        deck.summary().to_string(),
        "[ 2 of Clubs, 2 of Diamonds, 2 of Hearts, ..., \
         Ace of Diamonds, Ace of Hearts, Ace of Spades ]"
    );
    assert_eq!(
        format!("{deck:?}"),
        format!("Deck(52 cards) {}", deck.summary())
    );

    let small = Deck::from(four_cards().to_vec());
    assert_eq!(small.summary().to_string(), small.to_string());
}

#[test]
fn summary_elides_only_past_six_cards() {
    let ranks = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
    ];

    let six: Deck = ranks[..6].iter().map(|&r| card(r, Suit::Clubs)).collect();
    assert_eq!(
        six.summary().to_string(),
        "[ 2 of Clubs, 3 of Clubs, 4 of Clubs, 5 of Clubs, 6 of Clubs, 7 of Clubs ]"
    );
    assert_eq!(six.summary().to_string(), six.to_string());

    let seven: Deck = ranks.iter().map(|&r| card(r, Suit::Clubs)).collect();
    assert_eq!(
        seven.summary().to_string(),
        "[ 2 of Clubs, 3 of Clubs, 4 of Clubs, ..., 6 of Clubs, 7 of Clubs, 8 of Clubs ]"
    );
    assert!(!seven.summary().to_string().contains("5 of Clubs"));
}
