//! A standard 52-card deck.

use core::fmt;
use core::ops::Index;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards, dealt from the front.
///
/// A fresh deck holds one card for every rank and suit. Cards leave the deck
/// through [`Deck::deal`] and never come back.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Cards are ordered by rank first, then by suit in [`Suit::ALL`] order:
    /// `2 ♠, 2 ♣, 2 ♦, 2 ♥, 3 ♠, ...`.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::trace!("shuffled deck of {} cards", self.cards.len());
    }

    /// Removes and returns the card at the front of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::Empty);
        }

        let card = self.cards.remove(0);
        log::trace!("dealt {card}, {} remaining", self.cards.len());
        Ok(card)
    }

    /// Returns the card at `index` without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index` is past the end.
    pub fn get(&self, index: usize) -> Result<&Card, DeckError> {
        self.cards.get(index).ok_or(DeckError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.cards.iter())
    }
}

/// Writes cards as a bracketed, comma-separated list.
pub(crate) fn write_list<'a>(
    f: &mut fmt::Formatter<'_>,
    cards: impl IntoIterator<Item = &'a Card>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, card) in cards.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}
