//! Five-card hands and their classification.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::card::Card;
use crate::deck::{Deck, write_list};
use crate::error::{CategoryError, DeckError};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Counts ordered pairs of distinct positions holding the same rank.
///
/// Every matching pair is counted twice, so a pair scores 2, two pair 4,
/// trips 6, a full house 8 and quads 12.
fn count_matches(cards: &[Card]) -> u8 {
    let mut matches = 0;

    for (i, a) in cards.iter().enumerate() {
        for (j, b) in cards.iter().enumerate() {
            if i != j && a.rank() == b.rank() {
                matches += 1;
            }
        }
    }

    matches
}

fn same_card(a: &Card, b: &Card) -> bool {
    a.rank() == b.rank() && a.suit() == b.suit()
}

/// A named hand classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Exactly one pair.
    Pair,
    /// Two different pairs.
    TwoPair,
    /// Three cards of one rank, the others unmatched.
    Trips,
    /// Five consecutive ranks, ace high only.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    Quads,
}

impl Category {
    /// Every category.
    pub const ALL: [Self; 7] = [
        Self::Pair,
        Self::TwoPair,
        Self::Trips,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::Quads,
    ];

    /// Returns whether `hand` belongs to this category.
    #[must_use]
    pub fn matches(self, hand: &Hand) -> bool {
        match self {
            Self::Pair => hand.is_pair(),
            Self::TwoPair => hand.is_two_pair(),
            Self::Trips => hand.is_trips(),
            Self::Straight => hand.is_straight(),
            Self::Flush => hand.is_flush(),
            Self::FullHouse => hand.is_full_house(),
            Self::Quads => hand.is_quads(),
        }
    }

    /// The kebab-case name of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pair => "pair",
            Self::TwoPair => "two-pair",
            Self::Trips => "trips",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full-house",
            Self::Quads => "quads",
        }
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hand of five cards.
///
/// The cards keep the order they were dealt in. Every classification is
/// recomputed from them on each call.
///
/// Two hands are equal when they hold the same cards, suits included, in the
/// same order.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from five explicit cards.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if the same rank and suit appear
    /// twice.
    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Result<Self, DeckError> {
        for (i, a) in cards.iter().enumerate() {
            if cards[i + 1..].iter().any(|b| same_card(a, b)) {
                return Err(DeckError::DuplicateCard {
                    rank: a.rank(),
                    suit: a.suit(),
                });
            }
        }

        Ok(Self { cards })
    }

    /// Deals five cards off the front of `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if the deck holds fewer than five
    /// cards. The deck is left untouched in that case.
    pub fn deal_from(deck: &mut Deck) -> Result<Self, DeckError> {
        if deck.len() < HAND_SIZE {
            return Err(DeckError::NotEnoughCards {
                needed: HAND_SIZE,
                remaining: deck.len(),
            });
        }

        Ok(Self {
            cards: [
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
                deck.deal()?,
            ],
        })
    }

    /// Returns the cards in dealt order.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns a copy of the cards sorted by rank, lowest first.
    #[must_use]
    pub fn sorted_cards(&self) -> [Card; HAND_SIZE] {
        let mut sorted = self.cards;
        sorted.sort_unstable();
        sorted
    }

    /// Returns whether every card has the suit of the first card.
    #[must_use]
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards[1..].iter().all(|card| card.suit() == suit)
    }

    /// Returns the number of rank matches in the hand.
    ///
    /// Each matching pair of cards is counted once from either side:
    ///
    /// | hand       | matches |
    /// |------------|---------|
    /// | nothing    | 0       |
    /// | pair       | 2       |
    /// | two pair   | 4       |
    /// | trips      | 6       |
    /// | full house | 8       |
    /// | quads      | 12      |
    #[must_use]
    pub fn num_matches(&self) -> u8 {
        count_matches(&self.cards)
    }

    /// Returns whether the hand holds exactly one pair.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.num_matches() == 2
    }

    /// Returns whether the hand holds two pairs.
    #[must_use]
    pub fn is_two_pair(&self) -> bool {
        self.num_matches() == 4
    }

    /// Returns whether the hand holds three of a kind and nothing else.
    #[must_use]
    pub fn is_trips(&self) -> bool {
        self.num_matches() == 6
    }

    /// Returns whether the hand holds a full house.
    #[must_use]
    pub fn is_full_house(&self) -> bool {
        self.num_matches() == 8
    }

    /// Returns whether the hand holds four of a kind.
    #[must_use]
    pub fn is_quads(&self) -> bool {
        self.num_matches() == 12
    }

    /// Returns whether the hand holds five consecutive ranks.
    ///
    /// Aces only count high, so `A 2 3 4 5` is not a straight.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        if self.num_matches() != 0 {
            return false;
        }

        let sorted = self.sorted_cards();
        let low = sorted[0].rank().index();
        let high = sorted[HAND_SIZE - 1].rank().index();
        low + 4 == high
    }

    /// Returns the category the hand falls into, if any.
    ///
    /// Categories are checked from quads down to pair; a hand that is both a
    /// flush and a straight reports [`Category::Flush`].
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        [
            Category::Quads,
            Category::FullHouse,
            Category::Flush,
            Category::Straight,
            Category::Trips,
            Category::TwoPair,
            Category::Pair,
        ]
        .into_iter()
        .find(|category| category.matches(self))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cards
            .iter()
            .zip(&other.cards)
            .all(|(a, b)| same_card(a, b))
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn matches_double_count_each_pair() {
        let cards = [
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
        ];
        assert_eq!(count_matches(&cards), 2);
        assert_eq!(count_matches(&cards[2..]), 0);
    }
}
