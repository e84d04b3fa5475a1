//! Card and deck integration tests.

use std::collections::HashSet;

use deckhand::{Card, CardError, DECK_SIZE, Deck, DeckError, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn keys(cards: &[Card]) -> HashSet<(Rank, Suit)> {
    cards.iter().map(|c| (c.rank(), c.suit())).collect()
}

#[test]
fn card_parse_keeps_rank_and_suit() {
    for rank in Rank::ALL {
        for suit in Suit::ALL {
            let card = Card::parse(rank.symbol(), suit.symbol()).unwrap();
            assert_eq!(card.rank(), rank);
            assert_eq!(card.suit(), suit);
        }
    }
}

#[test]
fn card_parse_rejects_unknown_symbols() {
    assert_eq!(
        Card::parse("1", "♠").unwrap_err(),
        CardError::InvalidRank("1".to_string())
    );
    assert_eq!(
        Card::parse("T", "♠").unwrap_err(),
        CardError::InvalidRank("T".to_string())
    );
    assert_eq!(
        Card::parse("A", "x").unwrap_err(),
        CardError::InvalidSuit("x".to_string())
    );
    assert_eq!(
        Card::parse("A", "").unwrap_err(),
        CardError::InvalidSuit(String::new())
    );
}

#[test]
fn cards_are_equal_by_rank_only() {
    let spade = Card::new(Rank::Queen, Suit::Spades);
    let heart = Card::new(Rank::Queen, Suit::Hearts);
    assert_eq!(spade, heart);
    assert_ne!(spade.suit(), heart.suit());

    for suit in Suit::ALL {
        assert_ne!(Card::new(Rank::Two, suit), Card::new(Rank::Three, suit));
    }
}

#[test]
fn cards_order_by_rank() {
    let two = Card::new(Rank::Two, Suit::Hearts);
    let ten = Card::new(Rank::Ten, Suit::Spades);
    let ace = Card::new(Rank::Ace, Suit::Clubs);

    assert!(two < ten);
    assert!(ten < ace);
    assert!(!(ace < two));
    assert!(!(Card::new(Rank::Ten, Suit::Hearts) < ten));
}

#[test]
fn card_display() {
    assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A ♠");
    assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 ♥");
    assert_eq!(Card::new(Rank::Jack, Suit::Diamonds).to_string(), "J ♦");
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(keys(deck.cards()).len(), DECK_SIZE);

    assert_eq!(deck.get(0).unwrap().to_string(), "2 ♠");
    assert_eq!(deck[1].to_string(), "2 ♣");
    assert_eq!(deck[4].to_string(), "3 ♠");
    assert_eq!(deck[DECK_SIZE - 1].to_string(), "A ♥");
}

#[test]
fn shuffle_reorders_without_changing_contents() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let fresh = Deck::new();
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(keys(deck.cards()), keys(fresh.cards()));
    assert_ne!(deck.to_string(), fresh.to_string());
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn deal_removes_the_front_card() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
    let front = *deck.get(0).unwrap();

    let dealt = deck.deal().unwrap();
    assert_eq!((dealt.rank(), dealt.suit()), (front.rank(), front.suit()));
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(!keys(deck.cards()).contains(&(dealt.rank(), dealt.suit())));
}

#[test]
fn dealing_past_the_end_fails_cleanly() {
    let mut deck = Deck::new();
    let mut dealt = Vec::new();
    for _ in 0..DECK_SIZE {
        dealt.push(deck.deal().unwrap());
    }

    assert!(deck.is_empty());
    assert_eq!(keys(&dealt).len(), DECK_SIZE);
    assert_eq!(deck.deal().unwrap_err(), DeckError::Empty);
    assert_eq!(deck.deal().unwrap_err(), DeckError::Empty);
    assert_eq!(deck.len(), 0);
    assert_eq!(deck.to_string(), "[]");
}

#[test]
fn get_out_of_range() {
    let mut deck = Deck::new();
    deck.deal().unwrap();

    assert_eq!(
        deck.get(51).unwrap_err(),
        DeckError::IndexOutOfRange { index: 51, len: 51 }
    );
    assert!(deck.get(50).is_ok());
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn index_out_of_range_panics() {
    let deck = Deck::new();
    let _card = deck[DECK_SIZE];
}
